use super::*;

/// Deals a caller-chosen layout, for replays and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedDeckGenerator {
    cards: Vec<Card>,
}

impl FixedDeckGenerator {
    pub fn new(symbols: &[Symbol]) -> Result<Self> {
        if symbols.len() != DECK_SIZE {
            return Err(GameError::InvalidDeck);
        }
        let cards = deal_in_order(symbols.iter().copied());
        validate_deck(&cards)?;
        Ok(Self { cards })
    }

    /// Layout where card `2k` and `2k + 1` share a face.
    pub fn adjacent_pairs() -> Self {
        let symbols = Symbol::all().flat_map(|symbol| [symbol, symbol]);
        Self {
            cards: deal_in_order(symbols),
        }
    }

    /// Layout where card `k` and `k + 8` share a face.
    pub fn split_halves() -> Self {
        Self {
            cards: deal_in_order(paired_symbols()),
        }
    }
}

impl DeckGenerator for FixedDeckGenerator {
    fn generate(self) -> Vec<Card> {
        self.cards
    }
}
