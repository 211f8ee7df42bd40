#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod analysis;
mod card;
mod engine;
mod error;
mod generator;
mod types;

/// Number of distinct faces in a deck.
pub const PAIR_COUNT: usize = 8;

/// Number of cards on the board, every face appears exactly twice.
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

/// Cards per row when laid out on the board.
pub const ROW_LEN: usize = 4;

/// Rows on the board.
pub const ROW_COUNT: usize = DECK_SIZE / ROW_LEN;

/// Glyph shown for a card that is face down.
pub const PLACEHOLDER_GLYPH: &str = "⬜";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Matched,
    Mismatched,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Matched => true,
            Mismatched => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevertOutcome {
    NoChange,
    Reverted,
}

impl RevertOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Reverted => true,
        }
    }
}

/// User or timer intent fed into [`GameState::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reset,
    RevealCard(CardId),
    /// Hides the previous round's pair only if it did not match; a matched pair is never hidden.
    RevertIncorrectGuess,
}
