/// Distance below the viewport top treated as "where the reader is looking".
pub const REFERENCE_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Contact,
}

#[derive(Debug)]
pub struct SectionMeta {
    pub anchor: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

// Indexed by `SectionId as usize`, keep in declaration order.
static META: [SectionMeta; 6] = [
    SectionMeta {
        anchor: "about",
        label: "About",
        glyph: "👤",
    },
    SectionMeta {
        anchor: "skills",
        label: "Skills",
        glyph: "🛠️",
    },
    SectionMeta {
        anchor: "experience",
        label: "Experience",
        glyph: "💼",
    },
    SectionMeta {
        anchor: "education",
        label: "Education",
        glyph: "🎓",
    },
    SectionMeta {
        anchor: "projects",
        label: "Projects",
        glyph: "🚀",
    },
    SectionMeta {
        anchor: "contact",
        label: "Contact",
        glyph: "✉️",
    },
];

impl SectionId {
    /// Page order, which is also the tie-break order for overlapping extents.
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn meta(self) -> &'static SectionMeta {
        &META[self as usize]
    }

    /// Element id of the section, also its `#fragment`.
    pub fn anchor(self) -> &'static str {
        self.meta().anchor
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Vertical span of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub bottom: f64,
}

impl Extent {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, point: f64) -> bool {
        self.top <= point && point < self.bottom
    }
}

/// First section in page order whose extent holds the reference point for
/// `scroll`. Sections that can't be measured are passed over.
pub fn locate<M>(scroll: f64, mut measure: M) -> Option<SectionId>
where
    M: FnMut(SectionId) -> Option<Extent>,
{
    let point = scroll + REFERENCE_OFFSET;
    SectionId::ALL
        .into_iter()
        .find(|id| measure(*id).is_some_and(|extent| extent.contains(point)))
}

/// The section the navigation highlights. Starts empty and, once set, only
/// moves to another section, never back to empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSection(Option<SectionId>);

impl ActiveSection {
    pub fn current(&self) -> Option<SectionId> {
        self.0
    }

    pub fn is(&self, id: SectionId) -> bool {
        self.0 == Some(id)
    }

    /// Feeds one scroll sample. Returns whether the selection changed.
    pub fn observe<M>(&mut self, scroll: f64, measure: M) -> bool
    where
        M: FnMut(SectionId) -> Option<Extent>,
    {
        match locate(scroll, measure) {
            Some(id) if self.0 != Some(id) => {
                self.0 = Some(id);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contiguous(id: SectionId) -> Option<Extent> {
        match id {
            SectionId::About => Some(Extent::new(0.0, 800.0)),
            SectionId::Skills => Some(Extent::new(800.0, 1600.0)),
            SectionId::Experience => Some(Extent::new(1600.0, 2000.0)),
            _ => None,
        }
    }

    #[test]
    fn reference_point_picks_section() {
        assert_eq!(locate(750.0, contiguous), Some(SectionId::Skills));
        assert_eq!(locate(0.0, contiguous), Some(SectionId::About));
        assert_eq!(locate(1500.0, contiguous), Some(SectionId::Experience));
    }

    #[test]
    fn bottom_edge_belongs_to_next_section() {
        assert_eq!(locate(700.0, contiguous), Some(SectionId::Skills));
        assert_eq!(locate(699.0, contiguous), Some(SectionId::About));
    }

    #[test]
    fn past_every_section() {
        assert_eq!(locate(1900.0, contiguous), None);
    }

    #[test]
    fn empty_extent_never_selected() {
        let layout = |id: SectionId| match id {
            SectionId::About => Some(Extent::new(100.0, 100.0)),
            SectionId::Skills => Some(Extent::new(100.0, 500.0)),
            _ => None,
        };
        assert_eq!(locate(0.0, layout), Some(SectionId::Skills));

        let only_empty = |id: SectionId| match id {
            SectionId::Projects => Some(Extent::new(300.0, 300.0)),
            _ => None,
        };
        for s in [0.0, 199.0, 200.0, 201.0] {
            assert_eq!(locate(s, only_empty), None);
        }
    }

    #[test]
    fn overlap_goes_to_earlier_section() {
        let layout = |id: SectionId| match id {
            SectionId::Education => Some(Extent::new(0.0, 1000.0)),
            SectionId::Projects => Some(Extent::new(500.0, 1500.0)),
            _ => None,
        };
        assert_eq!(locate(600.0, layout), Some(SectionId::Education));
        assert_eq!(locate(950.0, layout), Some(SectionId::Projects));
    }

    #[test]
    fn tracker_keeps_last_match() {
        let mut active = ActiveSection::default();
        assert_eq!(active.current(), None);

        assert!(active.observe(750.0, contiguous));
        assert!(active.is(SectionId::Skills));

        // nothing contains 5100, selection stays on skills
        assert!(!active.observe(5000.0, contiguous));
        assert_eq!(active.current(), Some(SectionId::Skills));

        assert!(!active.observe(760.0, contiguous));
        assert!(active.observe(0.0, contiguous));
        assert!(active.is(SectionId::About));
    }

    #[test]
    fn tracker_stays_empty_without_match() {
        let mut active = ActiveSection::default();
        assert!(!active.observe(0.0, |_| None));
        assert_eq!(active.current(), None);
    }

    #[test]
    fn lookup_table_matches_enum() {
        for id in SectionId::ALL {
            assert!(!id.anchor().is_empty());
            assert_eq!(id.href(), format!("#{}", id.anchor()));
        }
        assert_eq!(SectionId::Education.meta().label, "Education");
        assert_eq!(SectionId::Contact.anchor(), "contact");
    }
}
