use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Canonical per-cell view for renderers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Head,
    Body,
    Food,
}

/// Read-only picture of a session, taken once per rendered frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub side: Coord,
    pub snake: Vec<Coord2>,
    pub heading: Heading,
    pub food: Option<Coord2>,
    pub score: CellCount,
    pub state: EngineState,
    pub collision: Option<Collision>,
}

impl Snapshot {
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            side: session.grid().side(),
            snake: session.snake().cells().collect(),
            heading: session.heading(),
            food: session.food(),
            score: session.score(),
            state: session.state(),
            collision: session.collision(),
        }
    }

    pub fn tiles(&self) -> Array2<Tile> {
        let mut tiles: Array2<Tile> = Array2::default((self.side, self.side).to_nd_index());
        if let Some(food) = self.food {
            tiles[food.to_nd_index()] = Tile::Food;
        }
        for (i, &cell) in self.snake.iter().enumerate() {
            tiles[cell.to_nd_index()] = if i == 0 { Tile::Head } else { Tile::Body };
        }
        tiles
    }
}

impl From<&GameSession> for Snapshot {
    fn from(session: &GameSession) -> Self {
        Self::from_session(session)
    }
}
