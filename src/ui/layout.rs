use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

use crate::app::{Focus, UiAction};

/// Screen regions shared by drawing and click handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub theme_toggle: Rect,
    pub seed: Rect,
    pub mode: Rect,
    pub trigger: Rect,
    pub body: Rect,
    pub cards: Vec<Rect>,
    pub footer: Rect,
}

/// Splits `area` into the fixed regions plus one column per visible card.
pub fn compute(area: Rect, card_count: usize) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(rows[0]);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Length(26),
            Constraint::Length(22),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    let cards_area = rows[2].inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    let cards = if card_count == 0 {
        Vec::new()
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, card_count as u32); card_count])
            .split(cards_area)
            .to_vec()
    };

    ScreenLayout {
        title: header[0],
        theme_toggle: header[1],
        seed: form[0],
        mode: form[1],
        trigger: form[2],
        body: rows[2],
        cards,
        footer: rows[3],
    }
}

impl ScreenLayout {
    /// Maps a click position to the action of the control under it.
    pub fn action_at(&self, column: u16, row: u16) -> Option<UiAction> {
        let position = Position::new(column, row);
        if self.trigger.contains(position) {
            return Some(UiAction::GetScheme);
        }
        if self.theme_toggle.contains(position) {
            return Some(UiAction::ToggleTheme);
        }
        if self.seed.contains(position) {
            return Some(UiAction::Focus(Focus::Seed));
        }
        if self.mode.contains(position) {
            return Some(UiAction::NextMode);
        }
        self.cards
            .iter()
            .position(|card| card.contains(position))
            .map(UiAction::CopyCard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn controls_map_to_their_actions() {
        let layout = compute(Rect::new(0, 0, 120, 40), 0);

        let (x, y) = center(layout.trigger);
        assert_eq!(layout.action_at(x, y), Some(UiAction::GetScheme));
        let (x, y) = center(layout.theme_toggle);
        assert_eq!(layout.action_at(x, y), Some(UiAction::ToggleTheme));
        let (x, y) = center(layout.seed);
        assert_eq!(layout.action_at(x, y), Some(UiAction::Focus(Focus::Seed)));
        let (x, y) = center(layout.mode);
        assert_eq!(layout.action_at(x, y), Some(UiAction::NextMode));
    }

    #[test]
    fn each_card_column_maps_to_its_index() {
        let layout = compute(Rect::new(0, 0, 120, 40), 5);
        assert_eq!(layout.cards.len(), 5);
        for (index, rect) in layout.cards.iter().enumerate() {
            let (x, y) = center(*rect);
            assert_eq!(layout.action_at(x, y), Some(UiAction::CopyCard(index)));
        }
    }

    #[test]
    fn clicks_outside_controls_do_nothing() {
        let layout = compute(Rect::new(0, 0, 120, 40), 5);
        let (x, y) = center(layout.footer);
        assert_eq!(layout.action_at(x, y), None);
        // Body border is not part of any card.
        assert_eq!(layout.action_at(layout.body.x, layout.body.y), None);
        // Title area of the header.
        assert_eq!(layout.action_at(2, 1), None);
    }
}
