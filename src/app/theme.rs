use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::{Palette, Theme};

/// Shared handle on the theme for every component that styles by it.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggled());
    }

    /// Tracked read of the current palette.
    pub fn palette(&self) -> &'static Palette {
        self.theme.get().palette()
    }
}

pub fn provide_theme() -> ThemeContext {
    // server renders dark; the stored value lands after hydration, empty store stays dark
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, JsonSerdeWasmCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );

    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let theme = RwSignal::new(Theme::default());
        (Signal::from(theme), theme.write_only())
    };

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    view! {
        <button
            type="button"
            class="text-xl px-2 py-1 rounded-full transition-transform duration-300 hover:scale-110"
            aria-label=move || ctx.theme.get().toggle_label()
            title=move || ctx.theme.get().toggle_label()
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.theme.get().toggle_glyph()}
        </button>
    }
}
