use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickConfig {
    pub base_delay: Duration,
    pub min_delay: Duration,
}

impl TickConfig {
    pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(200);
    pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(1);

    pub fn new(base_delay: Duration, min_delay: Duration) -> Self {
        let base_delay = base_delay.max(Duration::from_millis(1));
        let min_delay = min_delay.min(base_delay);
        Self {
            base_delay,
            min_delay,
        }
    }

    /// Delay for a tick re-armed by a key press `elapsed` into the tick window.
    pub fn compensated_delay(&self, elapsed: Duration) -> Duration {
        self.base_delay
            .saturating_sub(elapsed / 2)
            .max(self.min_delay)
            .min(self.base_delay)
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_DELAY, Self::DEFAULT_MIN_DELAY)
    }
}

/// Identifies one armed timer. Firings carrying an older token are stale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickToken(u32);

/// What the host must do with its single tick timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Drop any pending timer and fire `on_tick(token)` after `delay`.
    Arm { delay: Duration, token: TickToken },
    /// Leave the pending timer as it is.
    Keep,
    /// Drop the pending timer, nothing else will be scheduled.
    Cancel,
}

/// Decides when the next tick fires. It never sleeps or owns a timer; the
/// host turns [`TimerCommand`]s into real timeouts.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    config: TickConfig,
    token: TickToken,
    window_start: Option<Instant>,
    last_turn_source: Option<InputSource>,
}

impl TickScheduler {
    pub fn new(config: TickConfig) -> Self {
        Self {
            config,
            token: TickToken::default(),
            window_start: None,
            last_turn_source: None,
        }
    }

    pub fn config(&self) -> TickConfig {
        self.config
    }

    pub fn is_active(&self) -> bool {
        self.window_start.is_some()
    }

    pub fn last_turn_source(&self) -> Option<InputSource> {
        self.last_turn_source
    }

    pub fn start(&mut self, now: Instant) -> TimerCommand {
        self.last_turn_source = None;
        self.open_window(now)
    }

    /// A turn changed the heading; the tick in flight is rescheduled.
    ///
    /// The returned delay counts from `now`, not from the start of the tick
    /// window, so a key turn late in a window still lands past the tick it
    /// replaced.
    pub fn on_turn(&mut self, source: InputSource, now: Instant) -> TimerCommand {
        let Some(window_start) = self.window_start else {
            return TimerCommand::Keep;
        };

        self.last_turn_source = Some(source);
        let delay = match source {
            InputSource::Key => self
                .config
                .compensated_delay(now.saturating_duration_since(window_start)),
            InputSource::Swipe => self.config.base_delay,
        };
        log::trace!("{:?} turn re-arms tick in {:?}", source, delay);
        self.arm(delay)
    }

    /// Whether `token` belongs to the timer armed last.
    pub fn accepts(&self, token: TickToken) -> bool {
        self.is_active() && token == self.token
    }

    /// A tick fired and ran; `running` is the session state after it.
    pub fn on_tick(&mut self, running: bool, now: Instant) -> TimerCommand {
        if running {
            self.last_turn_source = None;
            self.open_window(now)
        } else {
            self.stop()
        }
    }

    pub fn stop(&mut self) -> TimerCommand {
        self.window_start = None;
        self.last_turn_source = None;
        self.token = self.next_token();
        TimerCommand::Cancel
    }

    fn open_window(&mut self, now: Instant) -> TimerCommand {
        self.window_start = Some(now);
        self.arm(self.config.base_delay)
    }

    fn arm(&mut self, delay: Duration) -> TimerCommand {
        self.token = self.next_token();
        TimerCommand::Arm {
            delay,
            token: self.token,
        }
    }

    fn next_token(&self) -> TickToken {
        TickToken(self.token.0.wrapping_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn armed_delay(command: TimerCommand) -> Duration {
        match command {
            TimerCommand::Arm { delay, .. } => delay,
            other => panic!("expected an armed timer, got {:?}", other),
        }
    }

    #[test]
    fn compensation_halves_elapsed_time_and_stays_in_range() {
        let config = TickConfig::default();

        assert_eq!(config.compensated_delay(ms(0)), ms(200));
        assert_eq!(config.compensated_delay(ms(100)), ms(150));
        assert_eq!(config.compensated_delay(ms(398)), ms(1));
        assert_eq!(config.compensated_delay(ms(5000)), ms(1));
    }

    #[test]
    fn config_keeps_lower_bound_below_base() {
        let config = TickConfig::new(ms(50), ms(80));

        assert_eq!(config.min_delay, ms(50));
        assert_eq!(config.compensated_delay(ms(60)), ms(50));
    }

    #[test]
    fn key_turns_are_compensated_and_swipes_are_not() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(TickConfig::default());
        assert_eq!(armed_delay(scheduler.start(t0)), ms(200));

        let key = scheduler.on_turn(InputSource::Key, t0 + ms(120));
        assert_eq!(armed_delay(key), ms(140));
        assert_eq!(scheduler.last_turn_source(), Some(InputSource::Key));

        let swipe = scheduler.on_turn(InputSource::Swipe, t0 + ms(150));
        assert_eq!(armed_delay(swipe), ms(200));
        assert_eq!(scheduler.last_turn_source(), Some(InputSource::Swipe));
    }

    #[test]
    fn each_tick_rearms_with_full_delay_and_clears_compensation() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(TickConfig::default());
        scheduler.start(t0);
        scheduler.on_turn(InputSource::Key, t0 + ms(80));

        let command = scheduler.on_tick(true, t0 + ms(160));

        assert_eq!(armed_delay(command), ms(200));
        assert_eq!(scheduler.last_turn_source(), None);
        let key = scheduler.on_turn(InputSource::Key, t0 + ms(200));
        assert_eq!(armed_delay(key), ms(180));
    }

    #[test]
    fn only_the_latest_token_is_accepted() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(TickConfig::default());
        let TimerCommand::Arm { token: first, .. } = scheduler.start(t0) else {
            panic!("start must arm the timer");
        };
        let TimerCommand::Arm { token: second, .. } = scheduler.on_turn(InputSource::Key, t0)
        else {
            panic!("a turn must re-arm the timer");
        };

        assert!(!scheduler.accepts(first));
        assert!(scheduler.accepts(second));
    }

    #[test]
    fn stopping_cancels_and_ignores_late_input() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(TickConfig::default());
        let TimerCommand::Arm { token, .. } = scheduler.start(t0) else {
            panic!("start must arm the timer");
        };

        assert_eq!(scheduler.on_tick(false, t0 + ms(200)), TimerCommand::Cancel);
        assert!(!scheduler.is_active());
        assert!(!scheduler.accepts(token));
        assert_eq!(
            scheduler.on_turn(InputSource::Key, t0 + ms(250)),
            TimerCommand::Keep
        );
    }
}
