use crossterm::event::KeyCode;
use ratatui::layout::Position;
use swatchr::{Clipboard, ColorSource, PaletteController, ShareLocation, SwatchAction};

use super::{AppEvent, AppView, HitTarget, TerminalSwatches};

pub type Controller<C, K> = PaletteController<TerminalSwatches, ShareLocation, C, K>;

/// The top-level application state.
pub struct App<C, K> {
    pub running: bool,
    pub view: AppView,
    pub controller: Controller<C, K>,
    pub selected: usize,
    pub status: Option<String>,
    pub hit_targets: Vec<HitTarget>,
}

impl<C, K> App<C, K>
where
    C: ColorSource,
    K: Clipboard,
{
    pub fn new(count: usize, location: ShareLocation, colors: C, clipboard: K) -> Self {
        let mut controller =
            PaletteController::new(TerminalSwatches::new(count), location, colors, clipboard);
        controller.start();
        Self {
            running: true,
            view: AppView::Palette,
            controller,
            selected: 0,
            status: None,
            hit_targets: Vec::new(),
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key),
            AppEvent::Click { column, row } => self.handle_click(column, row),
        }
        self.collect_copy_outcomes();
    }

    /// Fragment to paste back in to reload this palette.
    pub fn share_string(&self) -> String {
        self.controller.fragment()
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.view == AppView::Help {
            match key {
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char('?') | KeyCode::Esc => self.view = AppView::Palette,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Char(' ') => {
                self.controller.handle_key("Space");
                self.status = None;
            }
            KeyCode::Left => self.move_selection_left(),
            KeyCode::Right | KeyCode::Tab => self.move_selection_right(),
            KeyCode::Char('l') | KeyCode::Enter => {
                self.controller.handle_action(self.selected, SwatchAction::Lock)
            }
            KeyCode::Char('c') | KeyCode::Char('y') => {
                self.controller.handle_action(self.selected, SwatchAction::Copy)
            }
            KeyCode::Char(digit) if digit.is_ascii_digit() => {
                // 1..9 map to the first nine swatches, 0 to the tenth.
                let index = (digit as usize - '0' as usize + 9) % 10;
                if index < self.controller.len() {
                    self.selected = index;
                    self.controller.toggle_lock(index);
                }
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);
        let Some(target) = self
            .hit_targets
            .iter()
            .find(|target| target.area.contains(position))
            .copied()
        else {
            return;
        };
        self.selected = target.index;
        self.controller.handle_action(target.index, target.action);
    }

    fn move_selection_left(&mut self) {
        let count = self.controller.len();
        if count == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            count - 1
        } else {
            self.selected - 1
        };
    }

    fn move_selection_right(&mut self) {
        let count = self.controller.len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    fn collect_copy_outcomes(&mut self) {
        for outcome in self.controller.drain_copy_outcomes() {
            self.status = Some(match outcome.result {
                Ok(()) => format!("Copied {}", outcome.text),
                Err(err) => format!("Copy failed: {err}"),
            });
        }
    }
}
