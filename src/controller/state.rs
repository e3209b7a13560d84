use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info};

use crate::clipboard::{Clipboard, CopyOutcome, CopyReporter};
use crate::color::foreground_for;
use crate::fragment::{decode_fragment, encode_fragment};
use crate::types::{Swatch, SwatchAction, SwatchIndex};

use super::{ColorSource, Location, SwatchSurface};

/// Owns the swatches and mediates keypresses, clicks and page load against
/// the surface and the fragment.
pub struct PaletteController<S, L, C, K> {
    swatches: Vec<Swatch>,
    surface: S,
    location: L,
    colors: C,
    clipboard: K,
    outcome_tx: Sender<CopyOutcome>,
    outcome_rx: Receiver<CopyOutcome>,
}

impl<S, L, C, K> PaletteController<S, L, C, K>
where
    S: SwatchSurface,
    L: Location,
    C: ColorSource,
    K: Clipboard,
{
    pub fn new(surface: S, location: L, colors: C, clipboard: K) -> Self {
        let swatches = (0..surface.count())
            .map(|index| Swatch {
                color: surface.initial_color(index),
                locked: surface.initial_lock(index),
            })
            .collect();
        let (outcome_tx, outcome_rx) = mpsc::channel();
        Self {
            swatches,
            surface,
            location,
            colors,
            clipboard,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Seeds the palette from the current fragment and fills the rest.
    pub fn start(&mut self) {
        info!(
            swatches = self.swatches.len(),
            seeds = decode_fragment(&self.location.fragment()).len(),
            "starting palette"
        );
        self.randomize(true);
    }

    /// Rerolls every unlocked swatch. On the initial run, colors from the
    /// fragment take priority over fresh ones, slot by slot.
    pub fn randomize(&mut self, is_initial: bool) {
        let seeds = if is_initial {
            decode_fragment(&self.location.fragment())
        } else {
            Vec::new()
        };

        let mut palette = Vec::with_capacity(self.swatches.len());
        for index in 0..self.swatches.len() {
            if self.swatches[index].locked {
                palette.push(self.swatches[index].color.clone());
                continue;
            }
            let color = match seeds.get(index) {
                Some(seed) => seed.clone(),
                None => self.colors.random_color(),
            };
            self.paint(index, &color);
            palette.push(color);
        }

        let body = encode_fragment(&palette);
        debug!(initial = is_initial, fragment = %body, "palette randomized");
        self.location.replace_fragment(&body);
    }

    /// Flips the lock of one swatch. Unknown indices are ignored.
    pub fn toggle_lock(&mut self, index: SwatchIndex) {
        let Some(swatch) = self.swatches.get_mut(index) else {
            return;
        };
        swatch.locked = !swatch.locked;
        debug!(index, locked = swatch.locked, "lock toggled");
        self.surface.show_lock(index, swatch.locked);
    }

    /// Hands the displayed color of one swatch to the clipboard without
    /// waiting. The result shows up in [`Self::drain_copy_outcomes`].
    pub fn copy_swatch_color(&mut self, index: SwatchIndex) {
        let Some(swatch) = self.swatches.get(index) else {
            return;
        };
        let text = swatch.color.clone();
        let reporter = CopyReporter::new(index, text.clone(), self.outcome_tx.clone());
        self.clipboard.write_text(text, reporter);
    }

    /// Routes a delegated click.
    pub fn handle_action(&mut self, index: SwatchIndex, action: SwatchAction) {
        match action {
            SwatchAction::Lock => self.toggle_lock(index),
            SwatchAction::Copy => self.copy_swatch_color(index),
        }
    }

    /// Document-level key handler. Returns `true` when the key was consumed
    /// and the host should suppress its default action.
    pub fn handle_key(&mut self, code: &str) -> bool {
        if code.eq_ignore_ascii_case("space") {
            self.randomize(false);
            return true;
        }
        false
    }

    /// Copy outcomes that settled since the last call.
    pub fn drain_copy_outcomes(&self) -> Vec<CopyOutcome> {
        self.outcome_rx.try_iter().collect()
    }

    fn paint(&mut self, index: SwatchIndex, color: &str) {
        self.swatches[index].color = color.to_string();
        self.surface.paint(index, color, foreground_for(color));
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn is_locked(&self, index: SwatchIndex) -> bool {
        self.swatches.get(index).is_some_and(|swatch| swatch.locked)
    }

    /// Displayed colors in swatch order.
    pub fn palette(&self) -> Vec<String> {
        self.swatches.iter().map(|swatch| swatch.color.clone()).collect()
    }

    pub fn fragment(&self) -> String {
        self.location.fragment()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub(crate) fn color_source(&self) -> &C {
        &self.colors
    }

    #[cfg(test)]
    pub(crate) fn clipboard(&self) -> &K {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut K {
        &mut self.clipboard
    }
}
