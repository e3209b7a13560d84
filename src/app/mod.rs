mod state;
mod surface;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use swatchr::SwatchAction;

pub use state::App;
pub use surface::{SwatchCell, TerminalSwatches};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    Click { column: u16, row: u16 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Palette,
    Help,
}

/// Clickable region drawn in the last frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitTarget {
    pub area: Rect,
    pub index: usize,
    pub action: SwatchAction,
}
