use leptos::prelude::*;

use crate::sections::{ActiveSection, Extent, SectionId};

/// Where `id` sits in the document, if it is rendered yet.
fn measure_section(id: SectionId, scroll: f64) -> Option<Extent> {
    let el = document().get_element_by_id(id.anchor())?;
    let rect = el.get_bounding_client_rect();
    let top = rect.top() + scroll;
    Some(Extent::new(top, top + rect.height()))
}

/// Follows the scroll position and reports the section the reader is on.
pub fn use_active_section(scroll: Signal<f64>) -> Signal<ActiveSection> {
    let active = RwSignal::new(ActiveSection::default());

    Effect::new(move |_| {
        let sample = scroll.get();
        let mut next = active.get_untracked();
        if next.observe(sample, |id| measure_section(id, sample)) {
            log::debug!("active section -> {:?}", next.current());
            active.set(next);
        }
    });

    active.into()
}
