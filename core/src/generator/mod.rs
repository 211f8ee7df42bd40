use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait DeckGenerator {
    fn generate(self) -> Vec<Card>;
}

/// Checks that `cards` is a full deck in board order with every face exactly twice.
pub fn validate_deck(cards: &[Card]) -> Result<()> {
    if cards.len() != DECK_SIZE {
        return Err(GameError::InvalidDeck);
    }

    if cards
        .iter()
        .enumerate()
        .any(|(i, card)| usize::from(card.id()) != i)
    {
        return Err(GameError::InvalidDeck);
    }

    let mut counts: HashMap<Symbol, u8> = HashMap::with_capacity(PAIR_COUNT);
    for card in cards {
        *counts.entry(card.symbol()).or_default() += 1;
    }

    if counts.len() == PAIR_COUNT && counts.values().all(|&count| count == 2) {
        Ok(())
    } else {
        Err(GameError::InvalidDeck)
    }
}

/// Every face twice, in face order. Generators shuffle or replace this.
pub(crate) fn paired_symbols() -> Vec<Symbol> {
    Symbol::all().chain(Symbol::all()).collect()
}

pub(crate) fn deal_in_order(symbols: impl IntoIterator<Item = Symbol>) -> Vec<Card> {
    symbols
        .into_iter()
        .zip(0..)
        .map(|(symbol, id)| Card::new(id, symbol))
        .collect()
}
