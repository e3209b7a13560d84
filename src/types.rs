/// Position of a swatch in the row. A swatch is identified by its index alone.
pub type SwatchIndex = usize;

/// Icon class shown while a swatch is locked.
pub const LOCKED_GLYPH: &str = "fa-lock";
/// Icon class shown while a swatch is free to change.
pub const UNLOCKED_GLYPH: &str = "fa-lock-open";

/// A single color column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Swatch {
    pub color: String,
    pub locked: bool,
}

/// Icon class matching a lock flag.
pub fn lock_glyph(locked: bool) -> &'static str {
    if locked { LOCKED_GLYPH } else { UNLOCKED_GLYPH }
}

/// Text color used on top of a swatch background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Foreground {
    Black,
    White,
}

impl Foreground {
    pub fn css(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

/// What a click on a swatch element asks for, read from its `type` marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwatchAction {
    Lock,
    Copy,
}

impl SwatchAction {
    /// Parses the `type` discriminator of an interactive element.
    pub fn from_type(value: &str) -> Option<Self> {
        match value {
            "lock" => Some(Self::Lock),
            "copy" => Some(Self::Copy),
            _ => None,
        }
    }
}
