use core::ops::Neg;
use serde::{Deserialize, Serialize};

/// Direction of travel, always one of the four unit vectors.
///
/// The board uses mathematical orientation: `North` is `(0, 1)`, so a left
/// turn maps `(dx, dy)` to `(-dy, dx)` and a right turn to `(dy, -dx)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub const fn delta(self) -> (i8, i8) {
        use Heading::*;
        match self {
            North => (0, 1),
            East => (1, 0),
            South => (0, -1),
            West => (-1, 0),
        }
    }

    pub const fn from_delta(delta: (i8, i8)) -> Option<Self> {
        use Heading::*;
        match delta {
            (0, 1) => Some(North),
            (1, 0) => Some(East),
            (0, -1) => Some(South),
            (-1, 0) => Some(West),
            _ => None,
        }
    }

    pub const fn rotate(self, turn: Turn) -> Self {
        use Heading::*;
        match (turn, self) {
            (Turn::Ahead, heading) => heading,
            (Turn::Left, North) => West,
            (Turn::Left, West) => South,
            (Turn::Left, South) => East,
            (Turn::Left, East) => North,
            (Turn::Right, North) => East,
            (Turn::Right, East) => South,
            (Turn::Right, South) => West,
            (Turn::Right, West) => North,
        }
    }
}

impl Neg for Heading {
    type Output = Heading;

    fn neg(self) -> Self::Output {
        use Heading::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }
}

/// Relative steering request, also used to record which turn a tick consumed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    Ahead,
    Left,
    Right,
}

impl Turn {
    pub const fn is_ahead(self) -> bool {
        matches!(self, Self::Ahead)
    }

    pub const fn opposite(self) -> Self {
        use Turn::*;
        match self {
            Ahead => Ahead,
            Left => Right,
            Right => Left,
        }
    }
}
