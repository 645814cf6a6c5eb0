use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Running,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Game over, either by crashing or by filling the board.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Session was not running, nothing changed.
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
    /// Ate the last free cell.
    Filled,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// One whole game as an immutable value.
///
/// [`advance`](Self::advance) and [`request_turn`](Self::request_turn) return
/// a new session and leave `self` alone; a restart replaces the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    heading: Heading,
    food: Option<Coord2>,
    arbiter: TurnArbiter,
    state: EngineState,
    collision: Option<Collision>,
    ticks: u32,
}

impl GameSession {
    /// Board before the first start: snake in place, no food, not running.
    /// A start cell outside the board falls back to the centre.
    pub fn ready(config: &GameConfig) -> Self {
        let grid = config.grid;
        let start = grid.validate_coords(config.start).unwrap_or_else(|_| {
            log::warn!("start {:?} is off the board, using the centre", config.start);
            grid.center()
        });
        Self {
            grid,
            snake: Snake::new(start),
            heading: config.heading,
            food: None,
            arbiter: TurnArbiter::default(),
            state: EngineState::Ready,
            collision: None,
            ticks: 0,
        }
    }

    /// Fresh running session with newly placed food.
    pub fn start<F: FoodPlacer + ?Sized>(config: &GameConfig, placer: &mut F) -> Self {
        let mut session = Self::ready(config);
        session.state = EngineState::Running;
        session.food = match config.opening_food {
            Some(food) if session.grid.contains(food) && !session.snake.contains(food) => {
                Some(food)
            }
            _ => placer.place(&session.snake.occupancy(session.grid)),
        };
        if session.food.is_none() {
            session.state = EngineState::Won;
        }
        log::debug!(
            "game started: snake {:?}, heading {:?}, food {:?}",
            session.snake.head(),
            session.heading,
            session.food
        );
        session
    }

    /// Running session from explicit parts, validated against the board.
    pub fn from_parts(
        grid: Grid,
        snake: Snake,
        heading: Heading,
        food: Option<Coord2>,
    ) -> Result<Self> {
        for cell in snake.cells() {
            grid.validate_coords(cell)?;
        }
        if let Some(food) = food {
            grid.validate_coords(food)?;
            if snake.contains(food) {
                return Err(GameError::FoodOnSnake);
            }
        }

        let state = match (food, snake.len() == grid.total_cells()) {
            (_, true) => EngineState::Won,
            (Some(_), false) => EngineState::Running,
            (None, false) => return Err(GameError::MissingFood),
        };

        Ok(Self {
            grid,
            snake,
            heading,
            food,
            arbiter: TurnArbiter::default(),
            state,
            collision: None,
            ticks: 0,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn food(&self) -> Option<Coord2> {
        self.food
    }

    pub fn arbiter(&self) -> TurnArbiter {
        self.arbiter
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn score(&self) -> CellCount {
        self.snake.len() - 1
    }

    pub fn request_turn(&self, turn: Turn) -> (Self, TurnOutcome) {
        if !self.is_running() {
            return (self.clone(), TurnOutcome::Ignored);
        }

        let mut next = self.clone();
        let (heading, outcome) = next.arbiter.request(next.heading, turn);
        next.heading = heading;
        log::trace!("turn {:?}: {:?}, heading {:?}", turn, outcome, heading);
        (next, outcome)
    }

    /// One tick: deferred turn, move, collide, eat.
    pub fn advance<F: FoodPlacer + ?Sized>(&self, placer: &mut F) -> (Self, TickOutcome) {
        if !self.is_running() {
            return (self.clone(), TickOutcome::Idle);
        }

        let mut next = self.clone();
        next.ticks = next.ticks.saturating_add(1);
        next.heading = next.arbiter.apply_pending(next.heading);

        let outcome = next.step(placer);
        next.arbiter.end_tick();
        log::trace!(
            "tick {}: {:?}, head {:?}",
            next.ticks,
            outcome,
            next.snake.head()
        );
        (next, outcome)
    }

    fn step<F: FoodPlacer + ?Sized>(&mut self, placer: &mut F) -> TickOutcome {
        let collision = match self.grid.neighbor(self.snake.head(), self.heading) {
            None => Err(Collision::Wall),
            Some(head) if self.snake.would_collide(head) => Err(Collision::Body),
            Some(head) => Ok(head),
        };

        let head = match collision {
            Ok(head) => head,
            Err(collision) => {
                self.end_game(EngineState::Lost, Some(collision));
                return TickOutcome::Crashed(collision);
            }
        };

        if self.food != Some(head) {
            self.snake = self.snake.slithered(head);
            return TickOutcome::Moved;
        }

        self.snake = self.snake.grown(head);
        if self.snake.len() >= self.grid.total_cells() {
            self.food = None;
            self.end_game(EngineState::Won, None);
            return TickOutcome::Filled;
        }

        self.food = placer.place(&self.snake.occupancy(self.grid));
        if self.food.is_none() {
            self.end_game(EngineState::Won, None);
            return TickOutcome::Filled;
        }
        TickOutcome::Ate
    }

    fn end_game(&mut self, state: EngineState, collision: Option<Collision>) {
        if self.state.is_finished() {
            return;
        }
        self.state = state;
        self.collision = collision;
        log::debug!(
            "game over after {} ticks: {:?} ({:?}), score {}",
            self.ticks,
            state,
            collision,
            self.score()
        );
    }
}
