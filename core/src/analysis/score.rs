use alloc::collections::BTreeSet;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Per-player tally kept in half points so it stays exact.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    halves: [u32; 2],
}

impl Score {
    pub const fn half_points(&self, player: Player) -> u32 {
        self.halves[Self::slot(player)]
    }

    pub fn points(&self, player: Player) -> f32 {
        self.half_points(player) as f32 / 2.0
    }

    /// Player with the higher score, `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        use core::cmp::Ordering::*;
        match self.halves[0].cmp(&self.halves[1]) {
            Greater => Some(Player::One),
            Less => Some(Player::Two),
            Equal => None,
        }
    }

    pub fn display(&self, player: Player) -> ScoreDisplay {
        ScoreDisplay(self.half_points(player))
    }

    fn add_half(&mut self, player: Player) {
        self.halves[Self::slot(player)] += 1;
    }

    const fn slot(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Formats half points as `2`, `2.5`, ... without going through floats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoreDisplay(u32);

impl fmt::Display for ScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 2;
        if self.0 % 2 == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.5")
        }
    }
}

/// Last round whose pair may be counted.
///
/// A correct guess in the round just completed is final. Anything else is
/// either pending a revert or not a pair yet, so it is held back one round.
pub const fn score_boundary(current_round: Round, status: GuessStatus) -> Round {
    match status {
        GuessStatus::Correct => current_round.saturating_sub(1),
        GuessStatus::Unknown | GuessStatus::Incorrect => current_round.saturating_sub(2),
    }
}

pub fn score(cards: &[Card], current_round: Round, status: GuessStatus) -> Score {
    let as_of = score_boundary(current_round, status);
    let rounds: BTreeSet<Round> = cards
        .iter()
        .filter_map(Card::revealed_on_round)
        .filter(|&round| round <= as_of)
        .collect();

    let mut score = Score::default();
    for round in rounds {
        let pair = most_recent_pair_for_round(cards, round);
        if let [first, second] = pair.as_slice() {
            if first.symbol() != second.symbol() {
                continue;
            }
            for owner in [first.owner(), second.owner()].into_iter().flatten() {
                score.add_half(owner);
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn deck() -> Vec<Card> {
        FixedDeckGenerator::adjacent_pairs().generate()
    }

    fn reveal(card: &mut Card, by: Player, round: Round, seq: RevealSeq) {
        card.mark_revealed(Reveal { by, round, seq });
    }

    #[test]
    fn correct_pair_counts_once_the_round_is_behind() {
        let mut cards = deck();
        reveal(&mut cards[0], Player::One, 1, 0);
        reveal(&mut cards[1], Player::One, 1, 1);

        let score = score(&cards, 2, GuessStatus::Correct);
        assert_eq!(score.half_points(Player::One), 2);
        assert_eq!(score.points(Player::One), 1.0);
        assert_eq!(score.half_points(Player::Two), 0);
    }

    #[test]
    fn pending_incorrect_round_is_excluded() {
        let mut cards = deck();
        reveal(&mut cards[0], Player::One, 1, 0);
        reveal(&mut cards[1], Player::One, 1, 1);
        reveal(&mut cards[2], Player::Two, 2, 2);
        reveal(&mut cards[4], Player::Two, 2, 3);

        let score = score(&cards, 3, GuessStatus::Incorrect);
        assert_eq!(score.half_points(Player::One), 2);
        assert_eq!(score.half_points(Player::Two), 0);
    }

    #[test]
    fn unknown_status_holds_back_the_last_round() {
        let mut cards = deck();
        reveal(&mut cards[0], Player::One, 1, 0);
        reveal(&mut cards[1], Player::One, 1, 1);

        assert_eq!(score(&cards, 2, GuessStatus::Unknown), Score::default());
        assert_eq!(score(&cards, 3, GuessStatus::Unknown).half_points(Player::One), 2);
    }

    #[test]
    fn split_ownership_gives_half_each() {
        let mut cards = deck();
        reveal(&mut cards[6], Player::One, 4, 0);
        reveal(&mut cards[7], Player::Two, 4, 1);

        let score = score(&cards, 5, GuessStatus::Correct);
        assert_eq!(score.display(Player::One).to_string(), "0.5");
        assert_eq!(score.display(Player::Two).to_string(), "0.5");
        assert_eq!(score.leader(), None);
    }

    #[test]
    fn boundary_saturates_at_round_zero() {
        assert_eq!(score_boundary(1, GuessStatus::Unknown), 0);
        assert_eq!(score_boundary(1, GuessStatus::Correct), 0);
        assert_eq!(score_boundary(5, GuessStatus::Correct), 4);
        assert_eq!(score_boundary(5, GuessStatus::Incorrect), 3);
    }

    #[test]
    fn score_display_formats_halves() {
        assert_eq!(ScoreDisplay(0).to_string(), "0");
        assert_eq!(ScoreDisplay(3).to_string(), "1.5");
        assert_eq!(ScoreDisplay(8).to_string(), "4");
    }
}
