//! Swatchr: a row of color swatches that can be rerolled, locked, copied and
//! shared through the URL fragment.
//!
//! The [`controller::PaletteController`] holds all behavior and talks to its
//! host through small traits, so the same controller drives the browser page
//! (`wasm32`) and the terminal binary.

pub mod clipboard;
pub mod color;
pub mod controller;
pub mod fragment;
pub mod types;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clipboard::{Clipboard, ClipboardError, CopyOutcome, CopyReporter};
pub use controller::{ColorSource, Location, PaletteController, SwatchSurface};
pub use fragment::{ShareLocation, decode_fragment, encode_fragment};
pub use types::{Foreground, Swatch, SwatchAction, SwatchIndex};
