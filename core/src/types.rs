use core::fmt;
use serde::{Deserialize, Serialize};

use crate::PAIR_COUNT;

/// Position of a card on the board, also its stable identity for one deal.
pub type CardId = u8;

/// Round counter, the first round of a game is 1.
pub type Round = u32;

/// Monotonic per-game counter stamped on every reveal.
pub type RevealSeq = u32;

const FACES: [&str; PAIR_COUNT] = ["❤️", "🌹", "😎", "🐠", "🍑", "🎂", "🐱‍🐉", "😂"];

/// Face value of a card, opaque apart from equality and its glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(u8);

impl Symbol {
    /// Returns `None` if `index` does not name one of the deck faces.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PAIR_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn glyph(self) -> &'static str {
        FACES[self.0 as usize]
    }

    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..PAIR_COUNT as u8).map(Self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::One
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
