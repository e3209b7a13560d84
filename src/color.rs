/// Color utilities for swatches.
use palette::{LinSrgb, Srgb};
#[cfg(not(target_arch = "wasm32"))]
use rand::RngExt;

#[cfg(not(target_arch = "wasm32"))]
use crate::controller::ColorSource;
use crate::types::Foreground;

/// Backgrounds brighter than this get black text.
pub const CONTRAST_THRESHOLD: f32 = 0.5;

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses `#rrggbb` (the `#` is optional) into an sRGB color.
pub fn parse_hex(value: &str) -> Option<Srgb<u8>> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Srgb::new(r, g, b))
}

pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Formats the low 24 bits of `value` as `#rrggbb`.
pub fn from_rgb24(value: u32) -> String {
    let [_, r, g, b] = (value & 0x00FF_FFFF).to_be_bytes();
    to_hex(Srgb::new(r, g, b))
}

/// Uniformly random 24-bit color.
#[cfg(not(target_arch = "wasm32"))]
pub fn random_hex(rng: &mut impl RngExt) -> String {
    from_rgb24(rng.random_range(0..=0x00FF_FFFF_u32))
}

/// Relative luminance in `[0, 1]`. Strings that are not `#rrggbb` count as black.
pub fn luminance(value: &str) -> f32 {
    let Some(color) = parse_hex(value) else {
        return 0.0;
    };
    let linear: LinSrgb<f32> = color.into_format::<f32>().into_linear();
    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

pub fn foreground_for_luminance(luminance: f32) -> Foreground {
    if luminance > CONTRAST_THRESHOLD {
        Foreground::Black
    } else {
        Foreground::White
    }
}

/// Picks black or white text for the given background color.
pub fn foreground_for(background: &str) -> Foreground {
    foreground_for_luminance(luminance(background))
}

/// Color source backed by the thread-local RNG.
#[cfg(not(target_arch = "wasm32"))]
pub struct RandomColors {
    rng: rand::rngs::ThreadRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl RandomColors {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ColorSource for RandomColors {
    fn random_color(&mut self) -> String {
        random_hex(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn contrast_threshold_is_exclusive() {
        assert_eq!(foreground_for_luminance(0.5), Foreground::White);
        assert_eq!(foreground_for_luminance(0.9), Foreground::Black);
        assert_eq!(foreground_for_luminance(0.1), Foreground::White);
        assert_eq!(foreground_for_luminance(0.500_001), Foreground::Black);
    }

    #[test]
    fn luminance_spans_black_to_white() {
        assert!(luminance("#000000").abs() < 1e-6);
        assert!((luminance("#ffffff") - 1.0).abs() < 1e-4);
        // Mid grey is perceptually dark.
        let grey = luminance("#808080");
        assert!((grey - 0.2159).abs() < 1e-3, "got {grey}");
    }

    #[test]
    fn foreground_picks_readable_text() {
        assert_eq!(foreground_for("#ffffff"), Foreground::Black);
        assert_eq!(foreground_for("#ffff00"), Foreground::Black);
        assert_eq!(foreground_for("#0000ff"), Foreground::White);
        assert_eq!(foreground_for("#808080"), Foreground::White);
    }

    #[test]
    fn malformed_colors_fall_back_to_white_text() {
        assert_eq!(luminance("#zzzzzz"), 0.0);
        assert_eq!(luminance("#abc"), 0.0);
        assert_eq!(foreground_for("not a color"), Foreground::White);
    }

    #[test]
    fn parses_with_or_without_hash() {
        assert_eq!(parse_hex("#0a0B0c"), Some(Srgb::new(10, 11, 12)));
        assert_eq!(parse_hex("ff0000"), Some(Srgb::new(255, 0, 0)));
        assert_eq!(parse_hex("#ff00"), None);
        assert_eq!(parse_hex("#gg0000"), None);
    }

    #[test]
    fn rgb24_is_lowercase_and_padded() {
        assert_eq!(from_rgb24(0), "#000000");
        assert_eq!(from_rgb24(0x00AB_CDEF), "#abcdef");
        assert_eq!(from_rgb24(0xFF12_3456), "#123456");
    }

    #[test]
    fn random_colors_are_valid_hex() {
        let mut colors = RandomColors::new();
        for _ in 0..64 {
            let color = colors.random_color();
            assert!(is_valid_hex(&color), "{color}");
            assert_eq!(color, color.to_lowercase());
        }
    }
}
