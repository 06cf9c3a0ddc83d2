//! # Theme System
//!
//! Provides a centralized color theme system for the HENU TUI.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI, including
//! the token colors of the mock editor. Rendering code never hardcodes a
//! `ratatui::style::Color`; it references theme fields. The active theme can
//! be cycled at runtime with `t` and is persisted in the config file.
//!
//! ## Built-in Themes
//!
//! - **Dracula** (default) - the palette of the HENU PS site
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Nord** - arctic, north-bluish color palette
//! - **Tokyo Night** - dark theme inspired by Tokyo city lights
//! - **Gruvbox Dark** - retro groove color scheme

use crate::ide::highlight::TokenKind;
use ratatui::style::Color;

/// Colors of the five token classes the highlighter emits.
#[derive(Debug, Clone)]
pub struct SyntaxColors {
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub number: Color,
    pub function: Color,
}

/// All colors used by the HENU TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config file.
    pub name: &'static str,

    // -- Background colors --
    /// Page background.
    pub bg: Color,
    /// Panel background (explorer, editor, terminal, assistant).
    pub surface: Color,

    // -- Foreground / text colors --
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (separators, hints, footer).
    pub fg_dim: Color,

    // -- Accent / brand colors --
    /// Explorer borders, focused borders, user chat bubbles.
    pub accent: Color,
    /// Assistant panel and replies.
    pub secondary: Color,
    /// Editor tab bar and transition ripple.
    pub highlight: Color,
    /// Logo and brand text.
    pub brand: Color,

    // -- Semantic status colors --
    /// Terminal panel, prompt, success.
    pub success: Color,
    /// Errors and the close control.
    pub error: Color,

    // -- Selection --
    /// Background of the selected explorer row.
    pub selection_bg: Color,

    pub syntax: SyntaxColors,
}

impl Theme {
    /// Return the list of all built-in themes (order = cycle order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Dracula).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .map_or(0, |i| (i + 1) % BUILT_IN_THEMES.len());
        &BUILT_IN_THEMES[index]
    }

    pub fn token_color(&self, kind: Option<TokenKind>) -> Color {
        match kind {
            Some(TokenKind::Keyword) => self.syntax.keyword,
            Some(TokenKind::String) => self.syntax.string,
            Some(TokenKind::Comment) => self.syntax.comment,
            Some(TokenKind::Number) => self.syntax.number,
            Some(TokenKind::Function) => self.syntax.function,
            None => self.fg,
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Dracula (default)
    Theme {
        name: "Dracula",
        bg: Color::Rgb(13, 13, 13),
        surface: Color::Rgb(22, 22, 22),
        fg: Color::Rgb(237, 237, 237),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(255, 184, 108), // orange
        highlight: Color::Rgb(255, 121, 198), // pink
        brand: Color::Rgb(189, 147, 249),     // purple
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        selection_bg: Color::Rgb(68, 71, 90),
        syntax: SyntaxColors {
            keyword: Color::Rgb(255, 121, 198),
            string: Color::Rgb(80, 250, 123),
            comment: Color::Rgb(98, 114, 164),
            number: Color::Rgb(255, 184, 108),
            function: Color::Rgb(139, 233, 253),
        },
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),             // base
        surface: Color::Rgb(24, 24, 37),        // mantle
        fg: Color::Rgb(205, 214, 244),          // text
        fg_dim: Color::Rgb(108, 112, 134),      // overlay0
        accent: Color::Rgb(137, 180, 250),      // blue
        secondary: Color::Rgb(250, 179, 135),   // peach
        highlight: Color::Rgb(245, 194, 231),   // pink
        brand: Color::Rgb(203, 166, 247),       // mauve
        success: Color::Rgb(166, 227, 161),     // green
        error: Color::Rgb(243, 139, 168),       // red
        selection_bg: Color::Rgb(69, 71, 90),   // surface1
        syntax: SyntaxColors {
            keyword: Color::Rgb(203, 166, 247), // mauve
            string: Color::Rgb(166, 227, 161),  // green
            comment: Color::Rgb(108, 112, 134), // overlay0
            number: Color::Rgb(250, 179, 135),  // peach
            function: Color::Rgb(137, 180, 250), // blue
        },
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        surface: Color::Rgb(59, 66, 82),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(208, 135, 112), // aurora orange
        highlight: Color::Rgb(129, 161, 193),
        brand: Color::Rgb(180, 142, 173),
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        selection_bg: Color::Rgb(67, 76, 94),
        syntax: SyntaxColors {
            keyword: Color::Rgb(129, 161, 193),
            string: Color::Rgb(163, 190, 140),
            comment: Color::Rgb(97, 110, 136),
            number: Color::Rgb(180, 142, 173),
            function: Color::Rgb(136, 192, 208),
        },
    },
    // 3 - Tokyo Night
    Theme {
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        surface: Color::Rgb(22, 22, 30),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(125, 207, 255),    // cyan
        secondary: Color::Rgb(224, 175, 104), // yellow
        highlight: Color::Rgb(247, 118, 142),
        brand: Color::Rgb(187, 154, 247),
        success: Color::Rgb(115, 218, 202),
        error: Color::Rgb(247, 118, 142),
        selection_bg: Color::Rgb(41, 46, 66),
        syntax: SyntaxColors {
            keyword: Color::Rgb(187, 154, 247),
            string: Color::Rgb(158, 206, 106),
            comment: Color::Rgb(86, 95, 137),
            number: Color::Rgb(255, 158, 100),
            function: Color::Rgb(122, 162, 247),
        },
    },
    // 4 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        surface: Color::Rgb(50, 48, 47),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),   // blue
        secondary: Color::Rgb(254, 128, 25), // orange
        highlight: Color::Rgb(211, 134, 155),
        brand: Color::Rgb(211, 134, 155),
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        selection_bg: Color::Rgb(80, 73, 69),
        syntax: SyntaxColors {
            keyword: Color::Rgb(251, 73, 52),
            string: Color::Rgb(184, 187, 38),
            comment: Color::Rgb(146, 131, 116),
            number: Color::Rgb(211, 134, 155),
            function: Color::Rgb(250, 189, 47),
        },
    },
];
