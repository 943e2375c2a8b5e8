//! Dark and light color palettes for the dashboard.
//!
//! All colors are RGB truecolor. Views take a `&Palette` from
//! [`Palette::for_mode`] instead of using inline `Color::*` literals, so the
//! theme flag only ever changes colors, never layout.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Shared ──────────────────────────────────────────────────────────────────

/// White button face used by the theme toggle in both modes.
pub const BUTTON_BG: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
/// Button label.
pub const BUTTON_FG: Color = Color::Rgb(0x00, 0x00, 0x00);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Success: confirmations.
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
/// Info: informational highlights.
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

/// One complete style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Left control panel background.
    pub panel_bg: Color,
    /// Left panel text.
    pub panel_text: Color,
    /// Left panel secondary labels.
    pub panel_muted: Color,
    /// Right content panel background.
    pub content_bg: Color,
    /// Right panel text.
    pub content_text: Color,
    /// Table header row background.
    pub header_bg: Color,
    /// Table header row text.
    pub header_text: Color,
    /// Block borders and row dividers.
    pub border: Color,
    /// Selected option, active values.
    pub accent: Color,
}

/// Near-black gradient panels with white text.
pub const DARK: Palette = Palette {
    panel_bg: Color::Rgb(0x11, 0x18, 0x27),
    panel_text: Color::Rgb(0xFF, 0xFF, 0xFF),
    panel_muted: Color::Rgb(0xE5, 0xE7, 0xEB),
    content_bg: Color::Rgb(0x00, 0x00, 0x00),
    content_text: Color::Rgb(0xFF, 0xFF, 0xFF),
    header_bg: Color::Rgb(0x1F, 0x29, 0x37),
    header_text: Color::Rgb(0xFF, 0xFF, 0xFF),
    border: Color::Rgb(0x37, 0x41, 0x51),
    accent: Color::Rgb(0x3B, 0x82, 0xF6),
};

/// Blue control panel beside a near-white table.
pub const LIGHT: Palette = Palette {
    panel_bg: Color::Rgb(0x1E, 0x40, 0xAF),
    panel_text: Color::Rgb(0xFF, 0xFF, 0xFF),
    panel_muted: Color::Rgb(0xE5, 0xE7, 0xEB),
    content_bg: Color::Rgb(0xF9, 0xFA, 0xFB),
    content_text: Color::Rgb(0x11, 0x18, 0x27),
    header_bg: Color::Rgb(0xF3, 0xF4, 0xF6),
    header_text: Color::Rgb(0x6B, 0x72, 0x80),
    border: Color::Rgb(0xE5, 0xE7, 0xEB),
    accent: Color::Rgb(0x1D, 0x4E, 0xD8),
};

impl Palette {
    pub fn for_mode(dark_mode: bool) -> &'static Palette {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────────

    /// Base style of the left panel.
    pub fn panel(&self) -> Style {
        Style::default().fg(self.panel_text).bg(self.panel_bg)
    }

    /// Base style of the right panel.
    pub fn content(&self) -> Style {
        Style::default().fg(self.content_text).bg(self.content_bg)
    }

    /// Large panel title.
    pub fn title(&self) -> Style {
        self.panel().add_modifier(Modifier::BOLD)
    }

    /// Section label ("Select Test Type", "Test Description").
    pub fn heading(&self) -> Style {
        self.panel().add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.panel_muted).bg(self.panel_bg)
    }

    /// Highlighted option in the open selector.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(BUTTON_BG)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Theme toggle button face.
    pub fn button(&self) -> Style {
        Style::default()
            .fg(BUTTON_FG)
            .bg(BUTTON_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header row.
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.header_text)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar brand badge.
    pub fn brand_badge(&self) -> Style {
        Style::default()
            .fg(BUTTON_BG)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style (e.g., "t:theme").
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    // ── Block builders ──────────────────────────────────────────────────────

    /// A bordered block on the left panel.
    pub fn panel_block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.panel_muted))
            .style(self.panel())
    }

    /// A bordered block on the right panel.
    pub fn content_block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border))
            .style(self.content())
    }
}

/// Label of the theme toggle for the current mode.
pub fn toggle_label(dark_mode: bool) -> &'static str {
    if dark_mode {
        "Switch to Light Mode"
    } else {
        "Switch to Dark Mode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_picks_variant() {
        assert_eq!(Palette::for_mode(true), &DARK);
        assert_eq!(Palette::for_mode(false), &LIGHT);
    }

    #[test]
    fn test_variants_differ() {
        assert_ne!(DARK, LIGHT);
        assert_ne!(DARK.content_bg, LIGHT.content_bg);
        assert_ne!(DARK.panel().bg, LIGHT.panel().bg);
    }

    #[test]
    fn test_toggle_label_follows_flag() {
        assert_eq!(toggle_label(true), "Switch to Light Mode");
        assert_eq!(toggle_label(false), "Switch to Dark Mode");
    }

    #[test]
    fn test_style_helpers_return_non_default() {
        for palette in [&DARK, &LIGHT] {
            assert_ne!(palette.title(), Style::default());
            assert_ne!(palette.highlight(), Style::default());
            assert_ne!(palette.table_header(), Style::default());
            assert_ne!(palette.muted(), Style::default());
        }
    }
}
