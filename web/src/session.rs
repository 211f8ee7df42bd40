use memorito_core as game;

use game::{Action, CardId, GuessStatus, Player};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ViewCardState {
    Hidden,
    Revealed(game::Symbol),
    Mismatched(game::Symbol),
}

impl ViewCardState {
    pub(crate) const fn glyph(self) -> &'static str {
        match self {
            Self::Hidden => game::PLACEHOLDER_GLYPH,
            Self::Revealed(symbol) | Self::Mismatched(symbol) => symbol.glyph(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Msg {
    Reveal(CardId),
    RevertIncorrectGuess,
    NewGame,
}

/// What to do with the pending revert timer after an update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum TimerCommand {
    Schedule,
    Cancel,
    Keep,
}

pub(crate) const fn revert_timer_command(before: GuessStatus, after: GuessStatus) -> TimerCommand {
    match (before.is_incorrect(), after.is_incorrect()) {
        (false, true) => TimerCommand::Schedule,
        (true, false) => TimerCommand::Cancel,
        _ => TimerCommand::Keep,
    }
}

pub(crate) fn cell_label(id: CardId) -> String {
    format!("card-{}", u16::from(id) + 1)
}

pub(crate) fn cell_title(id: CardId) -> String {
    format!("Card {}", u16::from(id) + 1)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct SessionUpdate {
    pub changed: bool,
    pub timer: TimerCommand,
}

impl SessionUpdate {
    const UNCHANGED: Self = Self {
        changed: false,
        timer: TimerCommand::Keep,
    };
}

/// One game as seen by the board: the engine state plus view-side derivations.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    state: game::GameState,
}

impl GameSession {
    pub(crate) fn new(state: game::GameState) -> Self {
        Self { state }
    }

    pub(crate) fn state(&self) -> &game::GameState {
        &self.state
    }

    /// Turns a message into an engine action and applies it.
    ///
    /// Clicks on cards that are not eligible never reach the engine.
    pub(crate) fn handle(&mut self, msg: Msg) -> SessionUpdate {
        let action = match msg {
            Msg::Reveal(id) if self.state.can_reveal(id) => Action::RevealCard(id),
            Msg::Reveal(id) => {
                log::debug!("card {} is not selectable", id);
                return SessionUpdate::UNCHANGED;
            }
            Msg::RevertIncorrectGuess => Action::RevertIncorrectGuess,
            Msg::NewGame => Action::Reset,
        };

        let before = self.state.guess_status();
        let next = self.state.apply(action);
        if next == self.state {
            return SessionUpdate::UNCHANGED;
        }
        self.state = next;
        log::trace!(
            "state after {:?}: {}",
            action,
            serde_json::to_string(&self.state).unwrap_or_default()
        );

        SessionUpdate {
            changed: true,
            timer: revert_timer_command(before, self.state.guess_status()),
        }
    }

    pub(crate) fn card_state(&self, card: &game::Card) -> ViewCardState {
        if !card.is_revealed() {
            return ViewCardState::Hidden;
        }

        let pending = self.state.guess_status().is_incorrect()
            && game::most_recent_pair_for_round(self.state.cards(), self.state.round() - 1)
                .iter()
                .any(|other| other.id() == card.id());
        if pending {
            ViewCardState::Mismatched(card.symbol())
        } else {
            ViewCardState::Revealed(card.symbol())
        }
    }

    pub(crate) fn turn_line(&self) -> String {
        format!(
            "Player {}'s turn, round {}",
            self.state.current_player(),
            self.state.round()
        )
    }

    /// Game-over banner, or the incorrect-guess indicator while a wrong pair is up.
    pub(crate) fn status_line(&self) -> Option<String> {
        if self.state.is_game_over() {
            return Some(match self.state.winner() {
                Some(player) => format!("Game over! Player {} wins", player),
                None => "Game over! It's a draw".to_string(),
            });
        }

        self.state
            .guess_status()
            .is_incorrect()
            .then(|| "No match, flipping back...".to_string())
    }

    pub(crate) fn score_line(&self, player: Player) -> String {
        format!(
            "Player {}: {}",
            player,
            self.state.score().display(player)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::FixedDeckGenerator;

    fn session() -> GameSession {
        let state = game::GameState::from_generator(FixedDeckGenerator::split_halves(), 0).unwrap();
        GameSession::new(state)
    }

    fn view(session: &GameSession, id: CardId) -> ViewCardState {
        session.card_state(session.state().card(id).unwrap())
    }

    #[test]
    fn cells_are_labelled_one_based() {
        assert_eq!(cell_label(10), "card-11");
        assert_eq!(cell_title(0), "Card 1");
        assert_eq!(cell_label(255), "card-256");
    }

    #[test]
    fn clicking_card_eleven_shows_its_face() {
        let mut session = session();
        assert_eq!(view(&session, 10).glyph(), "⬜");

        let update = session.handle(Msg::Reveal(10));

        assert!(update.changed);
        assert_eq!(update.timer, TimerCommand::Keep);
        assert_ne!(view(&session, 10).glyph(), "⬜");
        assert_eq!(
            view(&session, 10).glyph(),
            session.state().card(10).unwrap().symbol().glyph()
        );
    }

    #[test]
    fn mismatch_schedules_revert_and_locks_the_board() {
        let mut session = session();
        session.handle(Msg::Reveal(10));
        let update = session.handle(Msg::Reveal(3));

        assert_eq!(update.timer, TimerCommand::Schedule);
        assert!(matches!(view(&session, 10), ViewCardState::Mismatched(_)));
        assert!(matches!(view(&session, 3), ViewCardState::Mismatched(_)));
        assert_eq!(session.status_line().as_deref(), Some("No match, flipping back..."));
        assert_eq!(session.turn_line(), "Player 2's turn, round 2");

        assert_eq!(session.handle(Msg::Reveal(5)), SessionUpdate::UNCHANGED);
        assert_eq!(view(&session, 5), ViewCardState::Hidden);

        let update = session.handle(Msg::RevertIncorrectGuess);
        assert_eq!(update.timer, TimerCommand::Cancel);
        assert_eq!(view(&session, 10), ViewCardState::Hidden);
        assert_eq!(view(&session, 3), ViewCardState::Hidden);
        assert_eq!(session.state().round(), 2);
        assert_eq!(session.score_line(Player::One), "Player 1: 0");
        assert_eq!(session.status_line(), None);
        assert_eq!(session.turn_line(), "Player 2's turn, round 2");
    }

    #[test]
    fn turn_and_round_stay_visible_while_a_wrong_pair_is_up() {
        let mut session = session();
        assert_eq!(session.turn_line(), "Player 1's turn, round 1");
        assert_eq!(session.status_line(), None);

        session.handle(Msg::Reveal(10));
        assert_eq!(session.turn_line(), "Player 1's turn, round 1");
        session.handle(Msg::Reveal(3));

        assert!(session.state().guess_status().is_incorrect());
        assert_eq!(session.turn_line(), "Player 2's turn, round 2");
        assert!(session.status_line().is_some());
    }

    #[test]
    fn match_stays_up_and_scores() {
        let mut session = session();
        session.handle(Msg::Reveal(10));
        let update = session.handle(Msg::Reveal(2));

        assert_eq!(update.timer, TimerCommand::Keep);
        assert!(matches!(view(&session, 10), ViewCardState::Revealed(_)));
        assert!(matches!(view(&session, 2), ViewCardState::Revealed(_)));
        assert_eq!(session.score_line(Player::One), "Player 1: 1");
        assert_eq!(session.score_line(Player::Two), "Player 2: 0");
    }

    #[test]
    fn new_game_cancels_a_pending_revert() {
        let mut session = session();
        session.handle(Msg::Reveal(0));
        session.handle(Msg::Reveal(1));

        let update = session.handle(Msg::NewGame);

        assert!(update.changed);
        assert_eq!(update.timer, TimerCommand::Cancel);
        assert_eq!(game::count_revealed(session.state().cards()), 0);
    }

    #[test]
    fn stale_revert_changes_nothing() {
        let mut session = session();
        session.handle(Msg::Reveal(0));
        session.handle(Msg::Reveal(8));

        assert_eq!(session.handle(Msg::RevertIncorrectGuess), SessionUpdate::UNCHANGED);
    }

    #[test]
    fn timer_follows_incorrect_transitions() {
        use GuessStatus::*;
        assert_eq!(revert_timer_command(Unknown, Incorrect), TimerCommand::Schedule);
        assert_eq!(revert_timer_command(Correct, Incorrect), TimerCommand::Schedule);
        assert_eq!(revert_timer_command(Incorrect, Unknown), TimerCommand::Cancel);
        assert_eq!(revert_timer_command(Incorrect, Incorrect), TimerCommand::Keep);
        assert_eq!(revert_timer_command(Unknown, Correct), TimerCommand::Keep);
    }

    #[test]
    fn finished_game_announces_the_result() {
        let mut session = session();
        for id in 0..8 {
            session.handle(Msg::Reveal(id));
            session.handle(Msg::Reveal(id + 8));
        }

        assert!(session.state().is_game_over());
        assert_eq!(session.status_line().as_deref(), Some("Game over! It's a draw"));
        assert_eq!(session.turn_line(), "Player 1's turn, round 9");
    }
}
