use crate::utils::*;
use clap::Args;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use mochi_snake_core as game;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_time::Instant;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// Board side length
    #[arg(long)]
    #[prop_or_default]
    pub side: Option<game::Coord>,

    /// Play the classic layout: 10x10, fixed opening food
    #[arg(long)]
    #[prop_or_default]
    pub classic: bool,
}

impl GameProps {
    fn config(&self) -> game::GameConfig {
        match (self.classic, self.side) {
            (true, _) | (false, None) => game::GameConfig::classic(),
            (false, Some(side)) => game::GameConfig::new(side),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Tick(game::TickToken),
    Key(game::Turn),
    Swipe(game::Swipe),
}

/// Keyboard and touch listeners, alive only while a game runs.
struct InputListeners {
    _keydown: EventListener,
    _touchstart: EventListener,
    _touchend: EventListener,
}

impl InputListeners {
    fn attach(ctx: &Context<GameView>) -> Self {
        let document = gloo::utils::document();
        let touch_origin: Rc<Cell<Option<(i32, i32)>>> = Rc::default();

        let _keydown = {
            let link = ctx.link().clone();
            EventListener::new(&document, "keydown", move |event| {
                let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                if let Some(turn) = turn_for_key(&event.key()) {
                    event.prevent_default();
                    log::trace!("key {:?} -> {:?}", event.key(), turn);
                    link.send_message(Msg::Key(turn));
                }
            })
        };

        let _touchstart = {
            let touch_origin = touch_origin.clone();
            EventListener::new(&document, "touchstart", move |event| {
                let Some(event) = event.dyn_ref::<web_sys::TouchEvent>() else {
                    return;
                };
                touch_origin.set(
                    event
                        .touches()
                        .get(0)
                        .map(|touch| (touch.client_x(), touch.client_y())),
                );
            })
        };

        let _touchend = {
            let link = ctx.link().clone();
            EventListener::new(&document, "touchend", move |event| {
                let Some(event) = event.dyn_ref::<web_sys::TouchEvent>() else {
                    return;
                };
                let Some(start) = touch_origin.take() else {
                    return;
                };
                if let Some(touch) = event.changed_touches().get(0) {
                    let swipe = game::Swipe::between(start, (touch.client_x(), touch.client_y()));
                    log::trace!("swipe {:?}", swipe);
                    link.send_message(Msg::Swipe(swipe));
                }
            })
        };

        Self {
            _keydown,
            _touchstart,
            _touchend,
        }
    }
}

pub(crate) struct GameView {
    game: game::Game,
    timer: Option<Timeout>,
    listeners: Option<InputListeners>,
}

impl GameView {
    /// Applies the scheduler's decision to the single tick timer. Listeners
    /// are dropped together with the timer so a finished game gets no input.
    fn apply(&mut self, ctx: &Context<Self>, command: game::TimerCommand) {
        use game::TimerCommand::*;
        match command {
            Arm { delay, token } => {
                let link = ctx.link().clone();
                self.timer = Some(Timeout::new(timeout_millis(delay), move || {
                    link.send_message(Msg::Tick(token))
                }));
                if self.listeners.is_none() {
                    self.listeners = Some(InputListeners::attach(ctx));
                }
            }
            Keep => {}
            Cancel => {
                log::debug!("timer and input listeners released");
                self.timer = None;
                self.listeners = None;
            }
        }
    }

    fn state_class(state: game::EngineState) -> &'static str {
        use game::EngineState::*;
        match state {
            Ready => "not-started",
            Running => "in-progress",
            Won => "win",
            Lost => "lose",
        }
    }

    fn tile_class(tile: game::Tile) -> Classes {
        use game::Tile::*;
        match tile {
            Empty => classes!("cell"),
            Head => classes!("cell", "snake", "head"),
            Body => classes!("cell", "snake"),
            Food => classes!("cell", "food"),
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
            game: game::Game::with_seed(props.config(), seed),
            timer: None,
            listeners: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let now = Instant::now();
        let before = self.game.snapshot();

        let command = match msg {
            Msg::Start => self.game.start_game(now),
            Msg::Tick(token) => self.game.on_tick(token, now),
            Msg::Key(turn) => self.game.submit_key_turn(turn, now),
            Msg::Swipe(swipe) => self.game.submit_swipe(swipe, now),
        };
        self.apply(ctx, command);

        self.game.snapshot() != before
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.game.snapshot();
        let tiles = snapshot.tiles();
        let side = snapshot.side;
        let state_class = Self::state_class(snapshot.state);
        let score = snapshot.score;

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });

        // y grows upwards on the board, so the top row is the last one
        let board = html! {
            <table class="board">
                {
                    for (0..side).rev().map(|y| html! {
                        <tr>
                            {
                                for (0..side).map(|x| {
                                    let class = Self::tile_class(tiles[[x as usize, y as usize]]);
                                    html! { <td {class}/> }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        };

        html! {
            <div class={classes!("mochi-snake", state_class)}>
                <nav>
                    <aside>{format!("Score: {}", score)}</aside>
                </nav>
                {
                    match snapshot.state {
                        game::EngineState::Ready => html! {
                            <button onclick={cb_start}>{"Start"}</button>
                        },
                        game::EngineState::Running => board,
                        game::EngineState::Won | game::EngineState::Lost => html! {
                            <div class="game-over">
                                <h2>{if snapshot.state == game::EngineState::Won { "Board cleared!" } else { "Game over" }}</h2>
                                <p>{format!("Your score is {}.", score)}</p>
                                <button onclick={cb_start}>{"Play again"}</button>
                            </div>
                        },
                    }
                }
            </div>
        }
    }
}
