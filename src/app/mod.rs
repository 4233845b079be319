mod state;

use crossterm::event::KeyCode;

use crate::scheme::FetchOutcome;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    Quit,
    KeyPress(KeyCode),
    Click { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
    SchemeLoaded(FetchOutcome),
}

/// Logical actions, independent of whether a key or a click produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    GetScheme,
    ToggleTheme,
    CopyCard(usize),
    Focus(Focus),
    NextMode,
    PrevMode,
    SelectPrevCard,
    SelectNextCard,
    EditSeed(char),
    DeleteSeedChar,
    RandomSeed,
    ToggleHelp,
    Quit,
}

/// Keyboard focus ring, in Tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Seed,
    Mode,
    Trigger,
    Cards,
    ThemeToggle,
}

impl Focus {
    const RING: [Focus; 5] = [
        Focus::Seed,
        Focus::Mode,
        Focus::Trigger,
        Focus::Cards,
        Focus::ThemeToggle,
    ];

    pub fn next(self) -> Self {
        let index = Self::RING.iter().position(|f| *f == self).unwrap_or(0);
        Self::RING[(index + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::RING.iter().position(|f| *f == self).unwrap_or(0);
        if index == 0 {
            Self::RING[Self::RING.len() - 1]
        } else {
            Self::RING[index - 1]
        }
    }
}
