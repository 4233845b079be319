use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{clamp_name, contrast_text, hex_to_color};
use super::theme::Theme;
use crate::app::{App, Focus};

/// Draws one swatch card per rect: color block, hex label and any toast.
pub fn render_cards(frame: &mut Frame, app: &App, theme: &Theme, areas: &[Rect]) {
    for (index, (card, area)) in app.cards.cards().iter().zip(areas).enumerate() {
        let selected = app.focus == Focus::Cards && index == app.selected_card;
        let border = if selected {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(*area);
        frame.render_widget(block, *area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let width = usize::from(inner.width);
        match hex_to_color(&card.hex) {
            Some(color) => {
                let swatch = Block::default().style(Style::default().bg(color));
                frame.render_widget(swatch, rows[0]);
            }
            None => {
                let unknown = Paragraph::new("?")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.dim()));
                frame.render_widget(unknown, rows[0]);
            }
        }

        let label = Paragraph::new(Span::styled(
            clamp_name(&card.label, width).trim_end().to_string(),
            Style::default()
                .fg(theme.text())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(label, rows[1]);

        if let Some(toast) = app.notifier.toasts.get(index) {
            let style = match hex_to_color(&card.hex) {
                Some(color) => Style::default().fg(contrast_text(color)).bg(color),
                None => Style::default().fg(theme.success()),
            };
            let toast = Paragraph::new(Span::styled(
                clamp_name(&toast.message, width).trim_end().to_string(),
                style.add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(toast, rows[2]);
        }
    }
}
