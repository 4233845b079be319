mod cards;
mod help;
mod helpers;
pub mod layout;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, Focus};
use theme::Theme;

use helpers::hex_to_color;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = Theme::for_surface(app.theme.surface());
    let layout = app.layout_in(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background())),
        area,
    );

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  Swatchr  ",
            Style::default().fg(Color::Black).bg(theme.primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color schemes",
            Style::default()
                .fg(theme.secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left)
    .block(rounded(&theme, false));
    frame.render_widget(header, layout.title);

    let toggle = Paragraph::new(app.theme.surface().toggle_glyph)
        .alignment(Alignment::Center)
        .block(rounded(&theme, app.focus == Focus::ThemeToggle));
    frame.render_widget(toggle, layout.theme_toggle);

    frame.render_widget(seed_field(app, &theme), layout.seed);
    frame.render_widget(mode_selector(app, &theme), layout.mode);
    frame.render_widget(trigger_button(app, &theme), layout.trigger);

    let body_block = rounded(&theme, app.focus == Focus::Cards).title(" Colors ");
    if app.cards.is_loading() {
        let spinner = SPINNER[(app.ticks % SPINNER.len() as u64) as usize];
        let loader = Paragraph::new(Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{spinner} Loading scheme..."),
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            )),
        ]))
        .alignment(Alignment::Center)
        .block(body_block);
        frame.render_widget(loader, layout.body);
    } else if app.cards.is_empty() {
        let hint = Paragraph::new(Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Pick a seed and mode, then press Enter or click \"Get color scheme\".",
                Style::default().fg(theme.dim()),
            )),
        ]))
        .alignment(Alignment::Center)
        .block(body_block);
        frame.render_widget(hint, layout.body);
    } else {
        frame.render_widget(body_block, layout.body);
        cards::render_cards(frame, app, &theme, &layout.cards);
    }

    frame.render_widget(
        Paragraph::new(footer_line(app, &theme)).block(rounded(&theme, false)),
        layout.footer,
    );

    if app.show_help {
        render_help_popup(frame, &theme);
    }
}

fn rounded(theme: &Theme, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default()
            .fg(theme.highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.secondary())
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().fg(theme.text()))
}

fn seed_field<'a>(app: &'a App, theme: &Theme) -> Paragraph<'a> {
    let focused = app.focus == Focus::Seed;
    let mut spans = vec![Span::styled(
        app.seed_input.as_str(),
        Style::default()
            .fg(theme.text())
            .add_modifier(Modifier::BOLD),
    )];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme.highlight())));
    }
    if let Some(preview) = hex_to_color(&app.seed_input) {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("███", Style::default().fg(preview)));
    }
    Paragraph::new(Line::from(spans)).block(rounded(theme, focused).title(" Seed "))
}

fn mode_selector<'a>(app: &App, theme: &Theme) -> Paragraph<'a> {
    let focused = app.focus == Focus::Mode;
    let arrow = if focused {
        Style::default().fg(theme.highlight())
    } else {
        Style::default().fg(theme.dim())
    };
    Paragraph::new(Line::from(vec![
        Span::styled("< ", arrow),
        Span::styled(
            app.mode.as_str(),
            Style::default()
                .fg(theme.text())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" >", arrow),
    ]))
    .alignment(Alignment::Center)
    .block(rounded(theme, focused).title(" Mode "))
}

fn trigger_button<'a>(app: &App, theme: &Theme) -> Paragraph<'a> {
    let style = if app.trigger_enabled {
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.dim())
            .add_modifier(Modifier::DIM)
    };
    Paragraph::new(Span::styled("Get color scheme", style))
        .alignment(Alignment::Center)
        .block(rounded(theme, app.focus == Focus::Trigger))
}

fn footer_line<'a>(app: &App, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    if let Some(at) = app.last_fetched_at {
        spans.push(Span::styled(
            format!(" Updated {} ", at.format("%H:%M:%S")),
            Style::default().fg(theme.success()),
        ));
        spans.push(Span::styled("| ", Style::default().fg(theme.dim())));
    }
    spans.push(Span::styled(
        "Tab: focus  Enter: go/copy  g: generate  t: theme  r: random seed  ?: help  q: quit",
        Style::default().fg(theme.dim()),
    ));
    Line::from(spans)
}

fn render_help_popup(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(help::build_help_text(theme))
        .alignment(Alignment::Left)
        .block(
            rounded(theme, false)
                .title(" Help ")
                .style(Style::default().bg(theme.background())),
        );
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::clipboard::{ClipboardError, ClipboardWriter};
    use crate::db;
    use crate::scheme::{FetchError, SchemeSource};
    use crate::types::{ColorRecord, SchemeRequest};

    struct NoSource;

    impl SchemeSource for NoSource {
        fn fetch_scheme(&self, _request: &SchemeRequest) -> Result<Vec<ColorRecord>, FetchError> {
            Err(FetchError::Network("offline".to_string()))
        }
    }

    struct NoClipboard;

    impl ClipboardWriter for NoClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let conn = db::init_in_memory().unwrap();
        App::new(conn, Arc::new(NoSource), Box::new(NoClipboard))
    }

    #[test]
    fn draws_cards_with_hex_labels() {
        let mut app = app();
        app.cards.render(&[
            ColorRecord {
                hex: "#0B5394".to_string(),
            },
            ColorRecord {
                hex: "#CFE2F3".to_string(),
            },
        ]);

        let text = screen_text(&app);
        assert!(text.contains("#0B5394"));
        assert!(text.contains("#CFE2F3"));
        assert!(text.contains("Get color scheme"));
    }

    #[test]
    fn loading_hides_cards() {
        let mut app = app();
        app.cards.render(&[ColorRecord {
            hex: "#0B5394".to_string(),
        }]);
        app.cards.show_loading();

        let text = screen_text(&app);
        assert!(text.contains("Loading scheme"));
        assert!(!text.contains("#0B5394"));
    }
}
