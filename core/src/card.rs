use serde::{Deserialize, Serialize};

use crate::*;

/// Who revealed a card, and when.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub by: Player,
    pub round: Round,
    pub seq: RevealSeq,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    symbol: Symbol,
    reveal: Option<Reveal>,
}

impl Card {
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            reveal: None,
        }
    }

    pub const fn id(&self) -> CardId {
        self.id
    }

    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub const fn is_revealed(&self) -> bool {
        self.reveal.is_some()
    }

    pub fn owner(&self) -> Option<Player> {
        self.reveal.map(|reveal| reveal.by)
    }

    pub fn revealed_on_round(&self) -> Option<Round> {
        self.reveal.map(|reveal| reveal.round)
    }

    pub fn revealed_seq(&self) -> Option<RevealSeq> {
        self.reveal.map(|reveal| reveal.seq)
    }

    pub(crate) fn mark_revealed(&mut self, reveal: Reveal) {
        self.reveal = Some(reveal);
    }

    pub(crate) fn hide(&mut self) {
        self.reveal = None;
    }
}
