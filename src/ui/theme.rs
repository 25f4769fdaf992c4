//! # Theme System
//!
//! Provides a centralized color theme for the TUI.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Instead of
//! hardcoding `ratatui::style::Color` values, rendering code references theme
//! fields. The active theme is selected by name from the config file.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::Color;

/// All colors used by the TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name referenced from the config file.
    pub name: &'static str,

    /// Main background color for panels.
    pub bg: Color,

    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (hints, footer, skeleton placeholders).
    pub fg_dim: Color,

    /// Primary accent used for the header and the focused input border.
    pub accent: Color,

    /// Success indicator (the transient "copied" marker).
    pub success: Color,
    /// Error banner and validation messages.
    pub error: Color,

    /// Accent for the corrected-text panel.
    pub corrected: Color,
    /// Accent for the improved-text panel.
    pub improved: Color,
    /// Accent for the literary-text panel.
    pub literary: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),          // base
        fg: Color::Rgb(205, 214, 244),       // text
        fg_dim: Color::Rgb(108, 112, 134),   // overlay0
        accent: Color::Rgb(137, 180, 250),   // blue
        success: Color::Rgb(166, 227, 161),  // green
        error: Color::Rgb(243, 139, 168),    // red
        corrected: Color::Rgb(166, 227, 161), // green
        improved: Color::Rgb(137, 180, 250),  // blue
        literary: Color::Rgb(203, 166, 247),  // mauve
    },
    // 1 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253), // cyan
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        corrected: Color::Rgb(80, 250, 123),  // green
        improved: Color::Rgb(139, 233, 253),  // cyan
        literary: Color::Rgb(189, 147, 249),  // purple
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208), // frost
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        corrected: Color::Rgb(163, 190, 140), // green
        improved: Color::Rgb(129, 161, 193),  // blue
        literary: Color::Rgb(180, 142, 173),  // purple
    },
    // 3 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152), // blue
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        corrected: Color::Rgb(184, 187, 38),  // green
        improved: Color::Rgb(131, 165, 152),  // blue
        literary: Color::Rgb(211, 134, 155),  // purple
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_themes_count() {
        assert_eq!(Theme::all().len(), 4);
    }

    #[test]
    fn test_default_is_mocha() {
        assert_eq!(Theme::default_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("catppuccin mocha").is_some());
        assert!(Theme::by_name("DRACULA").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len(), "duplicate theme names found");
    }
}
