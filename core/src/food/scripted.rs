use alloc::collections::VecDeque;

use super::*;

/// Deterministic placement: hands out the queued cells in order, skipping
/// any that are taken, then falls back to the first free cell in row order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedFoodPlacer {
    queue: VecDeque<Coord2>,
}

impl ScriptedFoodPlacer {
    pub fn new(cells: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            queue: cells.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl FoodPlacer for ScriptedFoodPlacer {
    fn place(&mut self, occupied: &Occupancy) -> Option<Coord2> {
        while let Some(coords) = self.queue.pop_front() {
            if occupied.grid().contains(coords) && !occupied.contains(coords) {
                return Some(coords);
            }
            log::warn!("Skipping scripted food cell {:?}, it is not free", coords);
        }
        occupied.iter_free().next()
    }
}
