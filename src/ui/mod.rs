mod help;
pub mod helpers;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use swatchr::{Clipboard, ColorSource, SwatchAction};

use crate::app::{App, AppView, HitTarget, SwatchCell};
use help::build_help_text;
use helpers::lock_label;
use theme::Theme;

/// Renders the entire UI for a single frame and records where the swatch
/// actions landed.
pub fn draw<C, K>(frame: &mut Frame, app: &mut App<C, K>)
where
    C: ColorSource,
    K: Clipboard,
{
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Swatchr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "palette generator",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ? for help", Style::default().fg(Theme::dim())),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(framed());
    frame.render_widget(header, layout[0]);

    match app.view {
        AppView::Palette => {
            app.hit_targets = render_swatches(
                frame,
                app.controller.surface().cells(),
                app.selected,
                layout[1],
            );
        }
        AppView::Help => {
            app.hit_targets.clear();
            let body = Paragraph::new(build_help_text())
                .style(Style::default().fg(Theme::text()))
                .alignment(Alignment::Left)
                .block(framed().title(" Help "));
            frame.render_widget(body, layout[1]);
        }
    }

    let footer = Paragraph::new(Text::from(footer_line(
        &app.share_string(),
        app.status.as_deref(),
    )))
    .alignment(Alignment::Left)
    .block(framed());
    frame.render_widget(footer, layout[2]);
}

fn framed() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

/// Column areas with the label row and the lock row of each swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SwatchSlots {
    column: Rect,
    label: Rect,
    lock: Rect,
}

fn swatch_slots(area: Rect, count: usize) -> Vec<SwatchSlots> {
    if count == 0 {
        return Vec::new();
    }
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count]).split(area);
    columns
        .iter()
        .map(|&column| {
            let middle = column.y + column.height / 2;
            SwatchSlots {
                column,
                label: Rect::new(column.x, middle.saturating_sub(1), column.width, 1)
                    .intersection(column),
                lock: Rect::new(column.x, middle + 1, column.width, 1).intersection(column),
            }
        })
        .collect()
}

fn render_swatches(
    frame: &mut Frame,
    cells: &[SwatchCell],
    selected: usize,
    area: Rect,
) -> Vec<HitTarget> {
    let mut targets = Vec::with_capacity(cells.len() * 2);
    for (index, (cell, slots)) in cells
        .iter()
        .zip(swatch_slots(area, cells.len()))
        .enumerate()
    {
        let mut style = Style::default().fg(cell.foreground);
        if let Some(background) = cell.background {
            style = style.bg(background);
        }
        frame.render_widget(Block::default().style(style), slots.column);

        let label = Paragraph::new(Line::from(Span::styled(
            cell.label.to_uppercase(),
            style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(label, slots.label);

        let lock = Paragraph::new(Line::from(Span::styled(lock_label(cell.locked), style)))
            .alignment(Alignment::Center);
        frame.render_widget(lock, slots.lock);

        if index == selected && slots.column.height > 0 {
            let marker = Rect::new(
                slots.column.x,
                slots.column.bottom() - 1,
                slots.column.width,
                1,
            );
            frame.render_widget(
                Paragraph::new(Span::styled("^", style.add_modifier(Modifier::BOLD)))
                    .alignment(Alignment::Center),
                marker,
            );
        }

        targets.push(HitTarget {
            area: slots.label,
            index,
            action: SwatchAction::Copy,
        });
        targets.push(HitTarget {
            area: slots.lock,
            index,
            action: SwatchAction::Lock,
        });
    }
    targets
}

fn footer_line(share: &str, status: Option<&str>) -> Line<'static> {
    let mut spans = vec![
        Span::styled(" Share ", Style::default().fg(Theme::dim())),
        Span::styled(
            share.to_string(),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(status) = status {
        let color = if status.starts_with("Copied") {
            Theme::success()
        } else {
            Theme::warn()
        };
        spans.push(Span::raw("   "));
        spans.push(Span::styled(status.to_string(), Style::default().fg(color)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_split_the_row_evenly() {
        let slots = swatch_slots(Rect::new(0, 3, 50, 20), 5);
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(|slot| slot.column.width == 10));
        assert_eq!(slots[2].column.x, 20);
        assert_eq!(slots[0].label.y, 12);
        assert_eq!(slots[0].lock.y, 14);
    }

    #[test]
    fn slots_stay_inside_short_columns() {
        let slots = swatch_slots(Rect::new(0, 0, 10, 1), 1);
        assert_eq!(slots[0].lock.height, 0);
        assert_eq!(slots[0].label.height, 1);
    }

    #[test]
    fn no_swatches_no_slots() {
        assert!(swatch_slots(Rect::new(0, 0, 10, 10), 0).is_empty());
    }
}
