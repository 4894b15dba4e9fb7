use leptos::prelude::*;

use crate::content::BRAND;
use crate::sections::{ActiveSection, SectionId};

use super::homepage::GRADIENT_TEXT;
use super::theme::{use_theme, ThemeToggle};

#[component]
fn SectionLink(
    id: SectionId,
    active: Signal<ActiveSection>,
    #[prop(optional)] on_pick: Option<Callback<()>>,
) -> impl IntoView {
    let theme = use_theme();
    let meta = id.meta();
    view! {
        <a
            href=id.href()
            class=move || {
                let palette = theme.palette();
                let state = if active.get().is(id) { palette.nav_active } else { palette.nav_link };
                format!("flex items-center gap-2 transition duration-300 {state}")
            }
            aria-current=move || active.get().is(id).then_some("location")
            on:click=move |_| {
                if let Some(cb) = on_pick {
                    cb.run(());
                }
            }
        >
            <span aria-hidden="true">{meta.glyph}</span>
            <span>{meta.label}</span>
        </a>
    }
}

/// Top bar with the mobile menu, plus the section sidebar on wide screens.
#[component]
pub fn Navigation(active: Signal<ActiveSection>) -> impl IntoView {
    let theme = use_theme();
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_: ()| set_menu_open(false));

    view! {
        <nav class=move || {
            format!("fixed top-0 left-0 w-full p-4 rounded-lg border z-50 {}", theme.palette().nav)
        }>
            <div class="max-w-5xl mx-auto flex justify-between items-center">
                <a href="#" class=format!("text-2xl font-bold {GRADIENT_TEXT}")>
                    {BRAND}
                </a>
                <div class="flex items-center gap-4">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="md:hidden text-2xl"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <ul class="md:hidden max-w-5xl mx-auto mt-4 flex flex-col gap-3">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| {
                            view! {
                                <li>
                                    <SectionLink id active on_pick=close_menu />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </nav>
        <aside class=move || {
            format!(
                "hidden md:flex fixed left-4 top-1/2 -translate-y-1/2 z-40 flex-col gap-4 p-4 rounded-lg border {}",
                theme.palette().nav,
            )
        }>
            {SectionId::ALL
                .into_iter()
                .map(|id| view! { <SectionLink id active /> })
                .collect_view()}
        </aside>
    }
}
