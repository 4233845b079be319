use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Local};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use rusqlite::Connection;
use tracing::{debug, error, info};

use crate::cards::CardList;
use crate::clipboard::{ClipboardNotifier, ClipboardWriter};
use crate::color;
use crate::scheme::{FetchOutcome, Fetcher, SchemeSource};
use crate::theme_store::ThemeStore;
use crate::types::{SCHEME_COUNT, SchemeMode, SchemeRequest};
use crate::ui::layout::{self, ScreenLayout};

use super::{AppEvent, Focus, UiAction};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub db: Connection,
    pub theme: ThemeStore,
    pub seed_input: String,
    pub mode: SchemeMode,
    pub focus: Focus,
    pub trigger_enabled: bool,
    pub cards: CardList,
    pub selected_card: usize,
    pub notifier: ClipboardNotifier,
    pub last_fetched_at: Option<DateTime<Local>>,
    pub show_help: bool,
    pub viewport: Rect,
    pub ticks: u64,
    fetcher: Fetcher,
}

impl App {
    pub fn new(
        db: Connection,
        source: Arc<dyn SchemeSource>,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        let theme = ThemeStore::load(&db);
        Self {
            running: true,
            db,
            theme,
            seed_input: color::random_seed(),
            mode: SchemeMode::default(),
            focus: Focus::default(),
            trigger_enabled: true,
            cards: CardList::default(),
            selected_card: 0,
            notifier: ClipboardNotifier::new(clipboard),
            last_fetched_at: None,
            show_help: false,
            viewport: Rect::default(),
            ticks: 0,
            fetcher: Fetcher::new(source),
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.ticks = self.ticks.wrapping_add(1),
            AppEvent::Quit => self.running = false,
            AppEvent::KeyPress(key) => {
                if let Some(action) = self.action_for_key(key) {
                    self.dispatch(action);
                }
            }
            AppEvent::Click { .. } if self.show_help => {
                // The overlay is modal: a click dismisses it and reaches nothing behind it.
                self.dispatch(UiAction::ToggleHelp);
            }
            AppEvent::Click { column, row } => {
                if let Some(action) = self.layout().action_at(column, row) {
                    self.dispatch(action);
                }
            }
            AppEvent::Resize { width, height } => {
                self.viewport = Rect::new(0, 0, width, height);
            }
            AppEvent::SchemeLoaded(outcome) => self.finish_request(outcome),
        }

        self.poll_fetches();
        self.notifier.toasts.expire(Instant::now());
    }

    /// Layout of the current frame; cards only count while they are shown.
    pub fn layout(&self) -> ScreenLayout {
        self.layout_in(self.viewport)
    }

    pub fn layout_in(&self, area: Rect) -> ScreenLayout {
        let card_count = if self.cards.cards_visible() {
            self.cards.len()
        } else {
            0
        };
        layout::compute(area, card_count)
    }

    /// Applies any fetch outcomes that finished since the last call.
    pub fn poll_fetches(&mut self) {
        while let Some(outcome) = self.fetcher.try_recv() {
            self.finish_request(outcome);
        }
    }

    fn action_for_key(&self, key: KeyCode) -> Option<UiAction> {
        if self.show_help {
            return match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    Some(UiAction::ToggleHelp)
                }
                _ => None,
            };
        }

        match key {
            KeyCode::Tab => return Some(UiAction::Focus(self.focus.next())),
            KeyCode::BackTab => return Some(UiAction::Focus(self.focus.prev())),
            _ => {}
        }

        if self.focus == Focus::Seed {
            return match key {
                KeyCode::Enter => Some(UiAction::GetScheme),
                KeyCode::Backspace | KeyCode::Delete => Some(UiAction::DeleteSeedChar),
                KeyCode::Esc => Some(UiAction::Focus(Focus::Trigger)),
                KeyCode::Char(ch) if !ch.is_control() => Some(UiAction::EditSeed(ch)),
                _ => None,
            };
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(UiAction::Quit),
            KeyCode::Char('?') => Some(UiAction::ToggleHelp),
            KeyCode::Char('g') => Some(UiAction::GetScheme),
            KeyCode::Char('t') => Some(UiAction::ToggleTheme),
            KeyCode::Char('r') => Some(UiAction::RandomSeed),
            KeyCode::Char('c') => Some(UiAction::CopyCard(self.selected_card)),
            KeyCode::Char('/') => Some(UiAction::Focus(Focus::Seed)),
            KeyCode::Enter => match self.focus {
                Focus::Seed | Focus::Mode | Focus::Trigger => Some(UiAction::GetScheme),
                Focus::Cards => Some(UiAction::CopyCard(self.selected_card)),
                Focus::ThemeToggle => Some(UiAction::ToggleTheme),
            },
            KeyCode::Left | KeyCode::Up => match self.focus {
                Focus::Mode => Some(UiAction::PrevMode),
                Focus::Cards => Some(UiAction::SelectPrevCard),
                _ => None,
            },
            KeyCode::Right | KeyCode::Down => match self.focus {
                Focus::Mode => Some(UiAction::NextMode),
                Focus::Cards => Some(UiAction::SelectNextCard),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn dispatch(&mut self, action: UiAction) {
        debug!(?action, "dispatch");
        match action {
            UiAction::GetScheme => self.request_scheme(),
            UiAction::ToggleTheme => {
                let theme = self.theme.toggle(&self.db);
                info!(theme = theme.as_str(), "theme toggled");
            }
            UiAction::CopyCard(index) => self.copy_card(index),
            UiAction::Focus(focus) => self.focus = focus,
            UiAction::NextMode => self.mode = self.mode.next(),
            UiAction::PrevMode => self.mode = self.mode.prev(),
            UiAction::SelectPrevCard => {
                self.selected_card = self.selected_card.saturating_sub(1);
            }
            UiAction::SelectNextCard => {
                if self.selected_card + 1 < self.cards.len() {
                    self.selected_card += 1;
                }
            }
            UiAction::EditSeed(ch) => self.seed_input.push(ch),
            UiAction::DeleteSeedChar => {
                self.seed_input.pop();
            }
            UiAction::RandomSeed => self.seed_input = color::random_seed(),
            UiAction::ToggleHelp => self.show_help = !self.show_help,
            UiAction::Quit => self.running = false,
        }
    }

    /// Starts a fetch for the current form values, unless one is already running.
    fn request_scheme(&mut self) {
        if !self.trigger_enabled {
            debug!("scheme request already in flight");
            return;
        }
        let request = SchemeRequest::from_input(&self.seed_input, self.mode, SCHEME_COUNT);
        info!(
            seed = %request.seed_hex,
            mode = request.mode.as_str(),
            count = request.count,
            "requesting color scheme"
        );
        self.trigger_enabled = false;
        self.cards.show_loading();
        self.fetcher.spawn(request);
    }

    /// Runs once per request, whatever the outcome.
    fn finish_request(&mut self, outcome: FetchOutcome) {
        self.cards.hide_loading();
        self.trigger_enabled = true;

        match outcome.result {
            Ok(colors) => {
                info!(count = colors.len(), "color scheme loaded");
                self.cards.render(&colors);
                self.notifier.toasts.clear();
                self.selected_card = 0;
                self.last_fetched_at = Some(Local::now());
            }
            Err(err) => {
                error!(
                    seed = %outcome.request.seed_hex,
                    mode = outcome.request.mode.as_str(),
                    "failed to fetch color scheme: {err}"
                );
            }
        }
    }

    fn copy_card(&mut self, index: usize) {
        if !self.cards.cards_visible() {
            return;
        }
        let Some(card) = self.cards.get(index) else {
            return;
        };
        let hex = card.hex.clone();
        self.selected_card = index;
        // Best effort; the notifier already logged any failure.
        let _ = self.notifier.copy_and_notify(index, &hex, Instant::now());
    }

    #[cfg(test)]
    fn wait_for_fetch(&mut self) -> bool {
        match self
            .fetcher
            .recv_timeout(std::time::Duration::from_secs(5))
        {
            Some(outcome) => {
                self.update(AppEvent::SchemeLoaded(outcome));
                true
            }
            None => false,
        }
    }
}
