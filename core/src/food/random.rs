use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement by rejection sampling over the whole board.
#[derive(Clone, Debug)]
pub struct RandomFoodPlacer {
    rng: SmallRng,
}

impl RandomFoodPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl FoodPlacer for RandomFoodPlacer {
    fn place(&mut self, occupied: &Occupancy) -> Option<Coord2> {
        if occupied.is_full() {
            log::warn!("Board already full, no cell left for food");
            return None;
        }

        let side = occupied.grid().side();
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let coords = (self.rng.random_range(0..side), self.rng.random_range(0..side));
            if !occupied.contains(coords) {
                log::trace!("food at {:?} after {} samples", coords, attempts);
                return Some(coords);
            }
        }
    }
}
