use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Snake must have at least one cell")]
    EmptySnake,
    #[error("Snake occupies the same cell twice")]
    OverlappingSnake,
    #[error("Snake cells are not orthogonally adjacent")]
    DisconnectedSnake,
    #[error("Food cannot be placed on the snake")]
    FoodOnSnake,
    #[error("A board with free cells needs food")]
    MissingFood,
}

pub type Result<T> = core::result::Result<T, GameError>;
