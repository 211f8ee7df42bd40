use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;
pub use score::*;

mod score;

/// Outcome of the last completed pair, derived from the cards and never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessStatus {
    Unknown,
    Correct,
    Incorrect,
}

impl GuessStatus {
    pub const fn is_incorrect(self) -> bool {
        matches!(self, Self::Incorrect)
    }
}

impl Default for GuessStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

pub fn count_revealed(cards: &[Card]) -> usize {
    cards.iter().filter(|card| card.is_revealed()).count()
}

/// The last two cards revealed during `round`, oldest first.
///
/// Recency is the reveal sequence number, so the order of `cards` on the board
/// does not matter. Unrevealed cards are never returned.
pub fn most_recent_pair_for_round(cards: &[Card], round: Round) -> SmallVec<[&Card; 2]> {
    let mut in_round: SmallVec<[&Card; DECK_SIZE]> = cards
        .iter()
        .filter(|card| card.revealed_on_round() == Some(round))
        .collect();
    in_round.sort_unstable_by_key(|card| card.revealed_seq());

    let start = in_round.len().saturating_sub(2);
    in_round[start..].iter().copied().collect()
}

pub fn guess_status(cards: &[Card], round: Round) -> GuessStatus {
    match most_recent_pair_for_round(cards, round).as_slice() {
        [first, second] if first.symbol() == second.symbol() => GuessStatus::Correct,
        [_, _] => GuessStatus::Incorrect,
        _ => GuessStatus::Unknown,
    }
}

pub fn is_game_over(cards: &[Card]) -> bool {
    cards.iter().all(|card| card.owner().is_some())
}
