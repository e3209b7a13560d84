use ratatui::style::Color;
use swatchr::{Foreground, SwatchSurface};

use crate::ui::helpers::{foreground_color, hex_to_color};

/// What the terminal shows for one swatch column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwatchCell {
    pub label: String,
    /// `None` when the label is not a color the terminal can show.
    pub background: Option<Color>,
    pub foreground: Color,
    pub locked: bool,
}

impl Default for SwatchCell {
    fn default() -> Self {
        Self {
            label: String::new(),
            background: None,
            foreground: Color::White,
            locked: false,
        }
    }
}

/// Swatch columns kept as plain cells, redrawn every frame.
pub struct TerminalSwatches {
    cells: Vec<SwatchCell>,
}

impl TerminalSwatches {
    pub fn new(count: usize) -> Self {
        Self {
            cells: vec![SwatchCell::default(); count],
        }
    }

    pub fn cells(&self) -> &[SwatchCell] {
        &self.cells
    }
}

impl SwatchSurface for TerminalSwatches {
    fn count(&self) -> usize {
        self.cells.len()
    }

    fn paint(&mut self, index: usize, color: &str, foreground: Foreground) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.label = color.to_string();
            cell.background = hex_to_color(color);
            cell.foreground = foreground_color(foreground);
        }
    }

    fn show_lock(&mut self, index: usize, locked: bool) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.locked = locked;
        }
    }
}
