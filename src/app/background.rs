use leptos::{html, prelude::*};

use crate::motion::{
    layout, parallax::TRANSITION, BrowserFrames, FrameLoop, PaintState, SHAPE_COUNT,
};

use super::theme::use_theme;

const SHAPE_CLASSES: [&str; SHAPE_COUNT] = [
    "absolute top-0 -left-4 md:w-96 md:h-96 w-72 h-72 bg-purple-500 rounded-full mix-blend-multiply filter blur-[128px] opacity-40 md:opacity-20",
    "absolute top-0 -right-4 w-96 h-96 bg-cyan-500 rounded-full mix-blend-multiply filter blur-[128px] opacity-40 md:opacity-20 hidden sm:block",
    "absolute -bottom-8 left-[-40%] md:left-20 w-96 h-96 bg-blue-500 rounded-full mix-blend-multiply filter blur-[128px] opacity-40 md:opacity-20",
    "absolute -bottom-10 right-20 w-96 h-96 bg-blue-500 rounded-full mix-blend-multiply filter blur-[128px] opacity-20 md:opacity-10 hidden sm:block",
];

/// Moves every attached shape to its offset for `scroll`, returns how many moved.
fn paint_shapes(shapes: &[NodeRef<html::Div>; SHAPE_COUNT], scroll: f64) -> usize {
    let mut painted = 0;
    for (i, (node, offset)) in shapes.iter().zip(layout(scroll)).enumerate() {
        // not mounted yet, or already torn down
        let Some(el) = node.try_get_untracked().flatten() else {
            continue;
        };
        let style = el.style();
        let moved = style
            .set_property("transform", &offset.translate())
            .and_then(|_| style.set_property("transition", TRANSITION));
        match moved {
            Ok(()) => painted += 1,
            Err(e) => log::debug!("shape {i} not moved: {e:?}"),
        }
    }
    painted
}

#[component]
pub fn ParallaxBackground(scroll: Signal<f64>) -> impl IntoView {
    let theme = use_theme();
    let shapes: [NodeRef<html::Div>; SHAPE_COUNT] = std::array::from_fn(|_| NodeRef::new());
    let frame_loop = StoredValue::new_local(None::<FrameLoop<BrowserFrames>>);

    Effect::new(move |_| {
        let mut state = PaintState::default();
        let running = FrameLoop::start(BrowserFrames, move || {
            let Some(sample) = scroll.try_get_untracked() else {
                return;
            };
            if state.needs_paint(sample) {
                state.record(sample, paint_shapes(&shapes, sample));
            }
        });
        frame_loop.set_value(Some(running));
    });
    // dropping the loop cancels its pending frame
    on_cleanup(move || frame_loop.dispose());

    view! {
        <div class="fixed inset-0 pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0">
                {shapes
                    .into_iter()
                    .zip(SHAPE_CLASSES)
                    .zip(layout(0.0))
                    .map(|((node, class), offset)| {
                        let style = format!(
                            "transform: {}; transition: {}",
                            offset.translate(),
                            TRANSITION,
                        );
                        view! { <div node_ref=node class=class style=style></div> }
                    })
                    .collect_view()}
            </div>
            <div class=move || {
                format!("absolute inset-0 bg-[size:24px_24px] {}", theme.palette().grid)
            }></div>
        </div>
    }
}
