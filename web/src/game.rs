use crate::session::*;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use memorito_core as game;
use yew::prelude::*;

pub(crate) const DEFAULT_REVERT_DELAY_MS: u32 = 3000;

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    id: game::CardId,
    card_state: ViewCardState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CardId>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    use ViewCardState::*;

    let CardProps {
        id,
        card_state,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "card",
        match card_state {
            Hidden => classes!(),
            Revealed(_) => classes!("open"),
            Mismatched(_) => classes!("open", "wrong"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", id);
        callback.emit(id);
    });

    html! {
        <td {class}>
            <button
                aria-label={cell_label(id)}
                title={cell_title(id)}
                disabled={locked}
                {onclick}
            >
                {card_state.glyph()}
            </button>
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// How long a wrong pair stays face up, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REVERT_DELAY_MS)]
    #[prop_or(DEFAULT_REVERT_DELAY_MS)]
    pub revert_delay_ms: u32,
}

pub struct GameView {
    session: GameSession,
    revert_delay_ms: u32,
    pending_revert: Option<Timeout>,
}

impl GameView {
    fn schedule_revert(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        log::debug!("flipping wrong pair back in {}ms", self.revert_delay_ms);
        self.pending_revert = Some(Timeout::new(self.revert_delay_ms, move || {
            link.send_message(Msg::RevertIncorrectGuess)
        }));
    }

    fn cancel_revert(&mut self) {
        // dropping the handle clears the timeout
        if self.pending_revert.take().is_some() {
            log::debug!("pending revert cancelled");
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let state = self.session.state();
        let grid = match state.grid() {
            Ok(grid) => grid,
            Err(err) => {
                log::error!("cannot lay out board: {}", err);
                return html! {};
            }
        };
        let callback = ctx.link().callback(Msg::Reveal);

        html! {
            <table class={(!state.is_game_over()).then_some("playable")}>
                {
                    for grid.rows().into_iter().map(|row| html! {
                        <tr>
                            {
                                for row.iter().map(|card| {
                                    let id = card.id();
                                    let card_state = self.session.card_state(card);
                                    let locked = !state.can_reveal(id);
                                    let callback = callback.clone();
                                    html! {
                                        <CardView key={cell_label(id)} {id} {card_state} {locked} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        Self {
            session: GameSession::new(game::GameState::deal(seed)),
            revert_delay_ms: props.revert_delay_ms,
            pending_revert: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        log::trace!("msg: {:?}", msg);
        let update = self.session.handle(msg);

        match update.timer {
            TimerCommand::Schedule => self.schedule_revert(ctx),
            TimerCommand::Cancel => self.cancel_revert(),
            TimerCommand::Keep => {}
        }

        update.changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::Player;

        let state = self.session.state();
        let current = state.current_player();
        let player_class = |player: Player| {
            classes!(
                "player",
                format!("player-{}", player.number()),
                (player == current && !state.is_game_over()).then_some("current")
            )
        };
        let status_class = classes!(
            "status",
            state.guess_status().is_incorrect().then_some("wrong"),
            state.is_game_over().then_some("over")
        );

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="memorito">
                <nav>
                    <aside class={player_class(Player::One)}>{self.session.score_line(Player::One)}</aside>
                    <span><button class="new-game" onclick={cb_new_game}>{"New game"}</button></span>
                    <aside class={player_class(Player::Two)}>{self.session.score_line(Player::Two)}</aside>
                </nav>
                <p class="turn">{self.session.turn_line()}</p>
                if let Some(status) = self.session.status_line() {
                    <p class={status_class} role="status">{status}</p>
                }
                {self.view_board(ctx)}
            </div>
        }
    }
}
