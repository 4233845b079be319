use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text(theme: &Theme) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title(theme, "Global"));
    lines.extend(section_lines(
        theme,
        &[
            "Tab / Shift+Tab: Move focus",
            "g: Get color scheme",
            "t: Toggle light/dark theme",
            "r: Random seed color",
            "/: Edit seed color",
            "?: Toggle help",
            "q / Esc: Quit",
        ],
    ));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Seed field"));
    lines.extend(section_lines(
        theme,
        &[
            "Type to edit, Backspace to delete",
            "Enter: Get color scheme",
            "Esc: Leave the field",
        ],
    ));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Mode / Cards"));
    lines.extend(section_lines(
        theme,
        &[
            "Left/Right: Change mode or selected card",
            "Enter / c: Copy selected card's hex",
        ],
    ));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Mouse"));
    lines.extend(section_lines(
        theme,
        &[
            "Click a card to copy its hex",
            "Click the mode box to cycle modes",
            "Click the moon/sun to switch theme",
        ],
    ));

    Text::from(lines)
}

fn section_title(theme: &Theme, title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(theme: &Theme, items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(theme.text()),
            ))
        })
        .collect()
}
