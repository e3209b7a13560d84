use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&["q: Quit", "?: Toggle help", "esc: Back / quit"]));

    lines.push(Line::from(""));
    lines.push(section_title("Palette"));
    lines.extend(section_lines(&[
        "space: Reroll unlocked swatches",
        "Left/Right, Tab: Select swatch",
        "l, Enter: Lock/unlock selected swatch",
        "1-9, 0: Lock/unlock swatch by number",
        "c, y: Copy selected color",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Mouse"));
    lines.extend(section_lines(&[
        "Click a color label: Copy it",
        "Click a lock button: Lock/unlock",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Sharing"));
    lines.extend(section_lines(&[
        "The footer shows the share string for the current palette.",
        "It is printed on exit; pass it back as `swatchr '<share>'`.",
    ]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
