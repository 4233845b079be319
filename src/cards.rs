/// Card list state: the rendered swatches and the loading indicator.
use crate::types::ColorRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorCard {
    /// Text shown under the swatch.
    pub label: String,
    /// Value handed to the clipboard when the card is clicked.
    pub hex: String,
}

#[derive(Debug, Default)]
pub struct CardList {
    cards: Vec<ColorCard>,
    loading: bool,
}

impl CardList {
    /// Replaces every card with one per record, in order.
    pub fn render(&mut self, colors: &[ColorRecord]) {
        self.cards = colors
            .iter()
            .map(|color| ColorCard {
                label: color.hex.clone(),
                hex: color.hex.clone(),
            })
            .collect();
    }

    pub fn show_loading(&mut self) {
        self.loading = true;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Cards are hidden whenever the loading indicator is up.
    pub fn cards_visible(&self) -> bool {
        !self.loading
    }

    pub fn cards(&self) -> &[ColorCard] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&ColorCard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
