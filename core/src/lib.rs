#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use arbiter::*;
pub use error::*;
pub use food::*;
pub use game::*;
pub use grid::*;
pub use heading::*;
pub use input::*;
pub use scheduler::*;
pub use session::*;
pub use snake::*;
pub use snapshot::*;
pub use types::*;

mod arbiter;
mod error;
mod food;
mod game;
mod grid;
mod heading;
mod input;
mod scheduler;
mod session;
mod snake;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid: Grid,
    pub start: Coord2,
    pub heading: Heading,
    /// First food of every game; spawned at random when `None`.
    pub opening_food: Option<Coord2>,
    pub tick: TickConfig,
}

impl GameConfig {
    pub const MIN_SIDE: Coord = 2;

    pub fn new(side: Coord) -> Self {
        let grid = Grid::new(side.clamp(Self::MIN_SIDE, Coord::MAX));
        Self {
            grid,
            start: grid.center(),
            heading: Heading::North,
            opening_food: None,
            tick: TickConfig::default(),
        }
    }

    /// The classic board: 10x10, snake at `(2, 2)` heading `(0, 1)`, first food at `(5, 5)`.
    pub fn classic() -> Self {
        Self {
            start: (2, 2),
            opening_food: Some((5, 5)),
            ..Self::new(10)
        }
    }

    pub fn with_start(self, start: Coord2) -> Result<Self> {
        let start = self.grid.validate_coords(start)?;
        if self.opening_food == Some(start) {
            return Err(GameError::FoodOnSnake);
        }
        Ok(Self { start, ..self })
    }

    pub fn with_heading(self, heading: Heading) -> Self {
        Self { heading, ..self }
    }

    pub fn with_opening_food(self, food: Option<Coord2>) -> Result<Self> {
        if let Some(food) = food {
            self.grid.validate_coords(food)?;
            if food == self.start {
                return Err(GameError::FoodOnSnake);
            }
        }
        Ok(Self {
            opening_food: food,
            ..self
        })
    }

    pub fn with_tick(self, tick: TickConfig) -> Self {
        Self { tick, ..self }
    }

    pub const fn total_cells(&self) -> CellCount {
        self.grid.total_cells()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_side_and_centers_snake() {
        let config = GameConfig::new(0);

        assert_eq!(config.grid.side(), GameConfig::MIN_SIDE);
        assert_eq!(GameConfig::new(10).start, (5, 5));
        assert_eq!(GameConfig::default().total_cells(), 100);
    }

    #[test]
    fn builders_validate_coordinates() {
        let config = GameConfig::new(4);

        assert_eq!(config.with_start((4, 0)), Err(GameError::InvalidCoords));
        assert_eq!(
            config.with_opening_food(Some(config.start)),
            Err(GameError::FoodOnSnake)
        );

        let config = config
            .with_start((0, 0))
            .and_then(|c| c.with_opening_food(Some((3, 3))))
            .unwrap()
            .with_heading(Heading::East);
        assert_eq!(config.start, (0, 0));
        assert_eq!(config.opening_food, Some((3, 3)));
        assert_eq!(config.heading, Heading::East);
    }

    #[test]
    fn classic_matches_reference_board() {
        let config = GameConfig::classic();

        assert_eq!(config.grid.side(), 10);
        assert_eq!(config.start, (2, 2));
        assert_eq!(config.heading.delta(), (0, 1));
        assert_eq!(config.opening_food, Some((5, 5)));
        assert_eq!(config.tick.base_delay, TickConfig::DEFAULT_BASE_DELAY);
    }
}
