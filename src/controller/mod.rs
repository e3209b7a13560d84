mod routing;
mod state;

pub use routing::{MarkupNode, resolve_click};
pub use state::PaletteController;

use crate::types::{Foreground, SwatchIndex};

/// The row of swatch elements a host displays.
///
/// The number of swatches is fixed by the host and read once when the
/// controller is built.
pub trait SwatchSurface {
    fn count(&self) -> usize;

    /// Shows `color` as the swatch label and background, with `foreground`
    /// used for the label and its action button.
    fn paint(&mut self, index: SwatchIndex, color: &str, foreground: Foreground);

    /// Switches the lock icon of one swatch.
    fn show_lock(&mut self, index: SwatchIndex, locked: bool);

    /// Lock state present in the markup before the controller took over.
    fn initial_lock(&self, _index: SwatchIndex) -> bool {
        false
    }

    /// Label text present in the markup before the controller took over.
    fn initial_color(&self, _index: SwatchIndex) -> String {
        String::new()
    }
}

/// Where the shareable fragment lives.
pub trait Location {
    /// Current fragment including its leading `#`, or an empty string.
    fn fragment(&self) -> String;

    /// Replaces the fragment with `body` (no leading `#`) without adding a
    /// history entry.
    fn replace_fragment(&mut self, body: &str);
}

/// Source of fresh colors for unlocked swatches.
pub trait ColorSource {
    /// Returns a CSS color, `#rrggbb`.
    fn random_color(&mut self) -> String;
}
