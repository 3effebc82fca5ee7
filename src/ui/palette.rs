//! Terminal colours for the active theme

use folio_ui::state::{Palette, Severity};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub text: Color,
    pub background: Color,
    pub border: Color,
    /// Highlight for active links, focused inputs and gauges
    pub accent: Color,
}

impl From<Palette> for Colors {
    fn from(palette: Palette) -> Self {
        let rgb = |[r, g, b]: [u8; 3]| Color::Rgb(r, g, b);
        Self {
            text: rgb(palette.text),
            background: rgb(palette.background),
            border: rgb(palette.border),
            accent: Color::Cyan,
        }
    }
}

/// Toast accent for a notification severity
pub fn severity_color(severity: Severity) -> Color {
    match severity.accent() {
        "green" => Color::Green,
        "red" => Color::Red,
        _ => Color::Blue,
    }
}

/// Single-glyph stand-in for the toast icon
pub fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✔",
        Severity::Error => "✖",
        Severity::Info => "ℹ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_ui::state::Theme;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_colors_follow_theme_palette() {
        let dark = Colors::from(Theme::Dark.palette());
        assert_eq!(dark.background, Color::Rgb(0x0f, 0x17, 0x2a));

        let light = Colors::from(Theme::Light.palette());
        assert_eq!(light.text, Color::Rgb(0x1e, 0x29, 0x3b));
    }

    #[test]
    fn test_severity_color() {
        assert_eq!(severity_color(Severity::Success), Color::Green);
        assert_eq!(severity_color(Severity::Error), Color::Red);
        assert_eq!(severity_color(Severity::Info), Color::Blue);
    }
}
