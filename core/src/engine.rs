use alloc::vec::Vec;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    current_player: Player,
    round: Round,
    cards: Vec<Card>,
    seed: u64,
    next_seq: RevealSeq,
}

impl GameState {
    /// Fresh game: shuffled deck, nothing revealed, round 1, player one to move.
    pub fn deal(seed: u64) -> Self {
        Self::with_cards(ShuffledDeckGenerator::new(seed).generate(), seed)
    }

    /// Fresh game on a known layout.
    pub fn from_generator(generator: impl DeckGenerator, seed: u64) -> Result<Self> {
        let cards = generator.generate();
        validate_deck(&cards)?;
        Ok(Self::with_cards(cards, seed))
    }

    fn with_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            current_player: Player::One,
            round: 1,
            cards,
            seed,
            next_seq: 0,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(usize::from(id))
    }

    /// Cards laid out row by row, [`ROW_LEN`] per row.
    pub fn grid(&self) -> Result<ArrayView2<'_, Card>> {
        ArrayView2::from_shape((ROW_COUNT, ROW_LEN), &self.cards)
            .map_err(|_| GameError::InvalidBoardShape)
    }

    /// Status of the pair completed in the previous round.
    pub fn guess_status(&self) -> GuessStatus {
        guess_status(&self.cards, self.round.saturating_sub(1))
    }

    pub fn score(&self) -> Score {
        score(&self.cards, self.round, self.guess_status())
    }

    pub fn is_game_over(&self) -> bool {
        is_game_over(&self.cards)
    }

    /// Winner of a finished game, `None` while playing or on a draw.
    pub fn winner(&self) -> Option<Player> {
        if self.is_game_over() {
            self.score().leader()
        } else {
            None
        }
    }

    /// Whether a click on `id` should be turned into a reveal.
    pub fn can_reveal(&self, id: CardId) -> bool {
        !self.guess_status().is_incorrect()
            && self.card(id).is_some_and(|card| !card.is_revealed())
    }

    pub fn apply(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::Reset => next.reset(),
            Action::RevealCard(id) => match next.reveal(id) {
                Ok(outcome) if !outcome.has_update() => {
                    log::debug!("card {} is already revealed", id);
                }
                Ok(_) => {}
                Err(err) => log::warn!("ignoring reveal of card {}: {}", id, err),
            },
            Action::RevertIncorrectGuess => {
                if !next.revert_incorrect_guess().has_update() {
                    log::debug!("no incorrect guess to revert");
                }
            }
        }
        next
    }

    pub fn reset(&mut self) {
        *self = Self::deal(next_seed(self.seed));
    }

    pub fn reveal(&mut self, id: CardId) -> Result<RevealOutcome> {
        let reveal = Reveal {
            by: self.current_player,
            round: self.round,
            seq: self.next_seq,
        };

        let card = self
            .cards
            .get_mut(usize::from(id))
            .ok_or(GameError::InvalidCardId)?;
        if card.is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }
        card.mark_revealed(reveal);
        self.next_seq += 1;
        log::trace!("player {} revealed card {} in round {}", reveal.by, id, reveal.round);

        if count_revealed(&self.cards) % 2 != 0 {
            return Ok(RevealOutcome::Revealed);
        }

        let status = guess_status(&self.cards, self.round);
        self.round += 1;
        self.current_player = self.current_player.other();
        log::debug!("round {} finished: {:?}", reveal.round, status);

        Ok(match status {
            GuessStatus::Correct => RevealOutcome::Matched,
            GuessStatus::Incorrect => RevealOutcome::Mismatched,
            // an even count always closes a pair in this round
            GuessStatus::Unknown => RevealOutcome::Revealed,
        })
    }

    /// Turns the previous round's pair face down again if it did not match.
    pub fn revert_incorrect_guess(&mut self) -> RevertOutcome {
        let previous = self.round.saturating_sub(1);
        if !guess_status(&self.cards, previous).is_incorrect() {
            return RevertOutcome::NoChange;
        }

        let ids: Vec<CardId> = most_recent_pair_for_round(&self.cards, previous)
            .iter()
            .map(|card| card.id())
            .collect();
        for id in ids {
            if let Some(card) = self.cards.get_mut(usize::from(id)) {
                card.hide();
            }
        }
        log::debug!("reverted incorrect guess from round {}", previous);
        RevertOutcome::Reverted
    }
}
