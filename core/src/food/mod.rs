use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Source of food positions. Implementations must never return an occupied
/// cell, and return `None` only when the board has no free cell left.
pub trait FoodPlacer {
    fn place(&mut self, occupied: &Occupancy) -> Option<Coord2>;
}

impl<F: FoodPlacer + ?Sized> FoodPlacer for &mut F {
    fn place(&mut self, occupied: &Occupancy) -> Option<Coord2> {
        (**self).place(occupied)
    }
}
