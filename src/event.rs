use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return Ok(None);
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    Some(AppEvent::Quit)
                } else {
                    Some(AppEvent::KeyPress(key.code))
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },
            Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
            _ => None,
        });
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    while app.running {
        let completed = terminal.draw(|frame| crate::ui::draw(frame, app))?;
        app.viewport = completed.area;

        step(app, poll(tick_rate)?);
    }
    Ok(())
}

/// Applies one polled event. Unmapped input still counts as a tick so toast
/// deadlines and the spinner keep moving under a stream of mouse motion.
pub fn step(app: &mut App, event: Option<AppEvent>) {
    app.update(event.unwrap_or(AppEvent::Tick));
}
