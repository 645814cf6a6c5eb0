use web_time::Instant;

use crate::*;

/// Host-facing driver: owns the current session, the food source and the
/// tick scheduler, and tells the host what to do with its timer.
///
/// Every method that can change timing returns a [`TimerCommand`]; the host
/// keeps exactly one timer and calls [`Game::on_tick`] with the token it was
/// armed with.
#[derive(Clone, Debug)]
pub struct Game<F = RandomFoodPlacer> {
    config: GameConfig,
    session: GameSession,
    placer: F,
    scheduler: TickScheduler,
}

impl Game<RandomFoodPlacer> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RandomFoodPlacer::new(seed))
    }
}

impl<F: FoodPlacer> Game<F> {
    pub fn new(config: GameConfig, placer: F) -> Self {
        Self {
            session: GameSession::ready(&config),
            scheduler: TickScheduler::new(config.tick),
            config,
            placer,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(&self.session)
    }

    /// Replaces whatever session exists with a fresh running one.
    pub fn start_game(&mut self, now: Instant) -> TimerCommand {
        self.scheduler.stop();
        self.session = GameSession::start(&self.config, &mut self.placer);
        if self.session.is_running() {
            self.scheduler.start(now)
        } else {
            TimerCommand::Cancel
        }
    }

    pub fn submit_key_turn(&mut self, turn: Turn, now: Instant) -> TimerCommand {
        self.submit_turn(InputSource::Key, turn, now)
    }

    pub fn submit_swipe(&mut self, swipe: Swipe, now: Instant) -> TimerCommand {
        match swipe.classify() {
            Some(turn) => self.submit_turn(InputSource::Swipe, turn, now),
            None => {
                log::trace!("ignoring swipe {:?}", swipe);
                TimerCommand::Keep
            }
        }
    }

    /// Timer callback. Stale tokens and non-running sessions are no-ops.
    pub fn on_tick(&mut self, token: TickToken, now: Instant) -> TimerCommand {
        if !self.scheduler.accepts(token) {
            log::trace!("dropping stale tick {:?}", token);
            return TimerCommand::Keep;
        }

        let (session, outcome) = self.session.advance(&mut self.placer);
        self.session = session;
        if matches!(outcome, TickOutcome::Crashed(_) | TickOutcome::Filled) {
            log::debug!("final score: {}", self.session.score());
        }
        self.scheduler.on_tick(self.session.is_running(), now)
    }

    fn submit_turn(&mut self, source: InputSource, turn: Turn, now: Instant) -> TimerCommand {
        let (session, outcome) = self.session.request_turn(turn);
        self.session = session;
        match outcome {
            TurnOutcome::Applied => self.scheduler.on_turn(source, now),
            TurnOutcome::Deferred | TurnOutcome::Repeated | TurnOutcome::Ignored => {
                TimerCommand::Keep
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::time::Duration;

    const fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn armed(command: TimerCommand) -> (Duration, TickToken) {
        match command {
            TimerCommand::Arm { delay, token } => (delay, token),
            other => panic!("expected an armed timer, got {:?}", other),
        }
    }

    fn classic_game() -> Game<ScriptedFoodPlacer> {
        Game::new(GameConfig::classic(), ScriptedFoodPlacer::default())
    }

    #[test]
    fn off_board_opening_food_is_replaced_before_rendering() {
        let config = GameConfig {
            opening_food: Some((12, 3)),
            ..GameConfig::classic()
        };
        let mut game = Game::new(config, ScriptedFoodPlacer::default());

        armed(game.start_game(Instant::now()));

        let snapshot = game.snapshot();
        let food = snapshot.food.unwrap();
        assert!(Grid::new(10).contains(food));
        assert_eq!(snapshot.tiles()[food.to_nd_index()], Tile::Food);
    }

    #[test]
    fn start_game_arms_first_tick() {
        let mut game = classic_game();
        assert_eq!(game.snapshot().state, EngineState::Ready);

        let (delay, _) = armed(game.start_game(Instant::now()));

        assert_eq!(delay, ms(200));
        let snapshot = game.snapshot();
        assert_eq!(snapshot.state, EngineState::Running);
        assert_eq!(snapshot.snake, [(2, 2)]);
        assert_eq!(snapshot.food, Some((5, 5)));
        assert_eq!(snapshot.score, 0);
    }

    #[test]
    fn ticks_follow_tokens() {
        let t0 = Instant::now();
        let mut game = classic_game();
        let (_, token) = armed(game.start_game(t0));

        let (_, next) = armed(game.on_tick(token, t0 + ms(200)));
        assert_eq!(game.snapshot().snake, [(2, 3)]);

        assert_eq!(game.on_tick(token, t0 + ms(210)), TimerCommand::Keep);
        assert_eq!(game.snapshot().snake, [(2, 3)]);

        armed(game.on_tick(next, t0 + ms(400)));
        assert_eq!(game.snapshot().snake, [(2, 4)]);
    }

    #[test]
    fn key_turn_rearms_with_compensation() {
        let t0 = Instant::now();
        let mut game = classic_game();
        let (_, stale) = armed(game.start_game(t0));

        let (delay, token) = armed(game.submit_key_turn(Turn::Right, t0 + ms(100)));
        assert_eq!(delay, ms(150));
        assert_eq!(game.snapshot().heading, Heading::East);

        // second turn in the same tick is queued and leaves the timer alone
        assert_eq!(
            game.submit_key_turn(Turn::Left, t0 + ms(120)),
            TimerCommand::Keep
        );
        assert_eq!(game.session().arbiter().pending(), Turn::Left);

        assert_eq!(game.on_tick(stale, t0 + ms(200)), TimerCommand::Keep);
        armed(game.on_tick(token, t0 + ms(250)));
        assert_eq!(game.snapshot().snake, [(2, 3)]);
        assert_eq!(game.snapshot().heading, Heading::North);
    }

    #[test]
    fn swipes_turn_without_compensation() {
        let t0 = Instant::now();
        let mut game = classic_game();
        game.start_game(t0);

        let (delay, _) = armed(game.submit_swipe(Swipe::new(-60, 10), t0 + ms(100)));
        assert_eq!(delay, ms(200));
        assert_eq!(game.snapshot().heading, Heading::West);

        assert_eq!(
            game.submit_swipe(Swipe::new(3, 90), t0 + ms(120)),
            TimerCommand::Keep
        );
        assert_eq!(game.scheduler().last_turn_source(), Some(InputSource::Swipe));
    }

    #[test]
    fn crash_cancels_timer_and_restart_resets_session() {
        let t0 = Instant::now();
        let mut game = classic_game();
        let (_, mut token) = armed(game.start_game(t0));

        // (2,2) heading north hits the top wall after 8 ticks
        let mut now = t0;
        let mut last = TimerCommand::Keep;
        for _ in 0..8 {
            now += ms(200);
            last = game.on_tick(token, now);
            if let TimerCommand::Arm { token: next, .. } = last {
                token = next;
            }
        }
        assert_eq!(last, TimerCommand::Cancel);
        assert_eq!(game.snapshot().state, EngineState::Lost);
        assert_eq!(game.snapshot().collision, Some(Collision::Wall));
        assert_eq!(
            game.submit_key_turn(Turn::Left, now + ms(10)),
            TimerCommand::Keep
        );

        let (_, fresh) = armed(game.start_game(now + ms(500)));
        assert_ne!(fresh, token);
        assert_eq!(game.snapshot().state, EngineState::Running);
        assert_eq!(game.snapshot().snake, [(2, 2)]);
        assert_eq!(game.session().ticks(), 0);
    }

    #[test]
    fn restart_invalidates_timer_of_previous_game() {
        let t0 = Instant::now();
        let mut game = classic_game();
        let (_, old) = armed(game.start_game(t0));

        armed(game.start_game(t0 + ms(50)));

        assert_eq!(game.on_tick(old, t0 + ms(200)), TimerCommand::Keep);
        assert_eq!(game.snapshot().snake, [(2, 2)]);
    }
}
