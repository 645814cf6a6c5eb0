use serde::{Deserialize, Serialize};

use crate::*;

/// Where a turn request came from. Only keyboard turns get latency compensation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Key,
    Swipe,
}

/// Touch gesture displacement in pixels, end point minus start point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swipe {
    pub dx: i32,
    pub dy: i32,
}

impl Swipe {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub const fn between((start_x, start_y): (i32, i32), (end_x, end_y): (i32, i32)) -> Self {
        Self {
            dx: end_x.saturating_sub(start_x),
            dy: end_y.saturating_sub(start_y),
        }
    }

    /// Horizontal-dominant swipes steer, everything else is ignored.
    pub const fn classify(self) -> Option<Turn> {
        if self.dx.unsigned_abs() <= self.dy.unsigned_abs() {
            None
        } else if self.dx > 0 {
            Some(Turn::Right)
        } else {
            Some(Turn::Left)
        }
    }
}
