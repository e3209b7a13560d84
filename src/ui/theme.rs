use ratatui::style::Color;

/// Unified color theme for the chrome around the swatches
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Successful copy
    pub fn success() -> Color {
        Color::Green
    }

    /// Failed copy
    pub fn warn() -> Color {
        Color::Yellow
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Share string and headings
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
