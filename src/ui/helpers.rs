use ratatui::style::Color;
use swatchr::{Foreground, color::parse_hex};

pub fn hex_to_color(value: &str) -> Option<Color> {
    let rgb = parse_hex(value)?;
    Some(Color::Rgb(rgb.red, rgb.green, rgb.blue))
}

pub fn foreground_color(foreground: Foreground) -> Color {
    match foreground {
        Foreground::Black => Color::Black,
        Foreground::White => Color::White,
    }
}

/// Lock button text; both states have the same width so the row does not jump.
pub fn lock_label(locked: bool) -> &'static str {
    if locked { "[x] locked" } else { "[ ] unlock" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_maps_to_rgb() {
        assert_eq!(hex_to_color("#0a141e"), Some(Color::Rgb(10, 20, 30)));
        assert_eq!(hex_to_color("0A141E"), Some(Color::Rgb(10, 20, 30)));
        assert_eq!(hex_to_color("#12"), None);
    }

    #[test]
    fn lock_labels_share_a_width() {
        assert_eq!(lock_label(true).len(), lock_label(false).len());
    }
}
