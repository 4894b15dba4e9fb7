use serde::{Deserialize, Serialize};

/// Local storage key the preference is persisted under.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Utility classes for everything that looks different per theme.
#[derive(Debug)]
pub struct Palette {
    pub page: &'static str,
    pub card: &'static str,
    pub muted: &'static str,
    pub nav: &'static str,
    pub nav_link: &'static str,
    pub nav_active: &'static str,
    pub input: &'static str,
    pub contact_band: &'static str,
    pub grid: &'static str,
}

const DARK: Palette = Palette {
    page: "bg-black text-white",
    card: "bg-white bg-opacity-10 backdrop-blur-lg rounded-lg border border-white border-opacity-20",
    muted: "text-gray-400",
    nav: "bg-white bg-opacity-10 backdrop-blur-lg border-white border-opacity-20",
    nav_link: "text-gray-300 hover:text-white",
    nav_active: "text-transparent bg-gradient-to-r from-green-400 to-blue-500 bg-clip-text font-semibold",
    input: "bg-gray-800 border-gray-700 text-white placeholder-gray-500",
    contact_band: "bg-gray-900",
    grid: "bg-[linear-gradient(to_right,#4f4f4f10_1px,transparent_1px),linear-gradient(to_bottom,#4f4f4f10_1px,transparent_1px)]",
};

const LIGHT: Palette = Palette {
    page: "bg-gray-50 text-gray-900",
    card: "bg-white bg-opacity-70 backdrop-blur-lg rounded-lg border border-gray-300 shadow-md",
    muted: "text-gray-600",
    nav: "bg-white bg-opacity-70 backdrop-blur-lg border-gray-300",
    nav_link: "text-gray-600 hover:text-gray-900",
    nav_active: "text-transparent bg-gradient-to-r from-green-600 to-blue-700 bg-clip-text font-semibold",
    input: "bg-white border-gray-300 text-gray-900 placeholder-gray-400",
    contact_band: "bg-gray-200",
    grid: "bg-[linear-gradient(to_right,#9f9f9f20_1px,transparent_1px),linear-gradient(to_bottom,#9f9f9f20_1px,transparent_1px)]",
};

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// Glyph on the toggle button, showing the theme a click switches to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn double_toggle_restores() {
        for t in [Theme::Dark, Theme::Light] {
            assert_ne!(t.toggled(), t);
            assert_eq!(t.toggled().toggled(), t);
        }
    }

    #[test]
    fn stored_form_round_trips() {
        for t in [Theme::Dark, Theme::Light] {
            let stored = serde_json::to_string(&t).expect("theme should serialize");
            let back: Theme = serde_json::from_str(&stored).expect("theme should deserialize");
            assert_eq!(back, t);
        }
        assert_eq!(
            serde_json::to_string(&Theme::Light).expect("theme should serialize"),
            "\"Light\""
        );
    }

    #[test]
    fn palettes_differ() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        assert_ne!(dark.page, light.page);
        assert_ne!(dark.card, light.card);
        assert_ne!(Theme::Dark.toggle_glyph(), Theme::Light.toggle_glyph());
    }
}
