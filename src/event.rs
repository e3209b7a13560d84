use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use swatchr::{Clipboard, ColorSource};

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Some(AppEvent::KeyPress(key.code))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(AppEvent::Click {
                    column: mouse.column,
                    row: mouse.row,
                })
            }
            _ => None,
        });
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop.
pub fn run<C, K>(app: &mut App<C, K>, terminal: &mut crate::tui::Terminal) -> Result<()>
where
    C: ColorSource,
    K: Clipboard,
{
    let tick_rate = Duration::from_millis(250);

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(tick_rate)? {
            app.update(event);
        }
    }
    Ok(())
}
