use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Heading rotated right away.
    Applied,
    /// Same turn already consumed this tick, e.g. a key repeat.
    Repeated,
    /// A turn already happened this tick; this one waits for the next tick.
    Deferred,
    /// Nothing to do: `Turn::Ahead`, or the session is not running.
    Ignored,
}

impl TurnOutcome {
    pub const fn has_update(self) -> bool {
        use TurnOutcome::*;
        match self {
            Applied => true,
            Deferred => true,
            Repeated => false,
            Ignored => false,
        }
    }
}

/// Once-per-tick turn lock with a single deferred slot.
///
/// `consumed` records the turn taken during the current tick and `pending`
/// holds at most one request that arrived after it. `Turn::Ahead` means empty
/// for both.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnArbiter {
    consumed: Turn,
    pending: Turn,
}

impl TurnArbiter {
    pub fn consumed(&self) -> Turn {
        self.consumed
    }

    pub fn pending(&self) -> Turn {
        self.pending
    }

    pub fn request(&mut self, heading: Heading, turn: Turn) -> (Heading, TurnOutcome) {
        if turn.is_ahead() {
            return (heading, TurnOutcome::Ignored);
        }

        if self.consumed.is_ahead() {
            self.consumed = turn;
            (heading.rotate(turn), TurnOutcome::Applied)
        } else if self.consumed == turn {
            (heading, TurnOutcome::Repeated)
        } else {
            self.pending = turn;
            (heading, TurnOutcome::Deferred)
        }
    }

    /// Applies the deferred turn, if any, at the start of a tick.
    pub fn apply_pending(&mut self, heading: Heading) -> Heading {
        let pending = core::mem::take(&mut self.pending);
        if pending.is_ahead() {
            return heading;
        }
        self.consumed = pending;
        heading.rotate(pending)
    }

    /// Unlocks turning for the next tick.
    pub fn end_tick(&mut self) {
        self.consumed = Turn::Ahead;
    }
}
