use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square playing field of `side x side` cells, indexed from `(0, 0)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    side: Coord,
}

impl Grid {
    pub const fn new(side: Coord) -> Self {
        Self { side }
    }

    pub const fn side(self) -> Coord {
        self.side
    }

    pub const fn size(self) -> Coord2 {
        (self.side, self.side)
    }

    pub const fn total_cells(self) -> CellCount {
        mult(self.side, self.side)
    }

    pub const fn center(self) -> Coord2 {
        (self.side / 2, self.side / 2)
    }

    pub const fn contains(self, (x, y): Coord2) -> bool {
        x < self.side && y < self.side
    }

    pub fn validate_coords(self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// The cell one step from `coords` along `heading`, or `None` past the edge.
    pub fn neighbor(self, coords: Coord2, heading: Heading) -> Option<Coord2> {
        apply_delta(coords, heading.delta(), self.size())
    }

    /// True when `coords` equals any of `body`. Callers decide which cells to pass.
    pub fn collides_with_body<'a>(
        coords: Coord2,
        body: impl IntoIterator<Item = &'a Coord2>,
    ) -> bool {
        body.into_iter().any(|&cell| cell == coords)
    }

    pub fn iter_cells(self) -> impl Iterator<Item = Coord2> {
        let side = self.side;
        (0..side).flat_map(move |y| (0..side).map(move |x| (x, y)))
    }
}

/// Set of taken cells, the input of food placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Occupancy {
    mask: Array2<bool>,
    count: CellCount,
}

impl Occupancy {
    pub fn new(grid: Grid) -> Self {
        Self {
            mask: Array2::default(grid.size().to_nd_index()),
            count: 0,
        }
    }

    pub fn from_cells(grid: Grid, cells: impl IntoIterator<Item = Coord2>) -> Self {
        let mut occupancy = Self::new(grid);
        for coords in cells {
            occupancy.insert(coords);
        }
        occupancy
    }

    pub fn insert(&mut self, coords: Coord2) -> bool {
        if !self.grid().contains(coords) {
            log::warn!("Ignoring occupied cell outside the board: {:?}", coords);
            return false;
        }
        let slot = &mut self.mask[coords.to_nd_index()];
        if *slot {
            false
        } else {
            *slot = true;
            self.count += 1;
            true
        }
    }

    pub fn grid(&self) -> Grid {
        let (side, _) = self.mask.dim();
        Grid::new(side.try_into().unwrap_or(Coord::MAX))
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.grid().contains(coords) && self[coords]
    }

    pub fn count(&self) -> CellCount {
        self.count
    }

    pub fn free_count(&self) -> CellCount {
        self.grid().total_cells() - self.count
    }

    pub fn is_full(&self) -> bool {
        self.free_count() == 0
    }

    pub fn iter_free(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.grid()
            .iter_cells()
            .filter(move |&coords| !self[coords])
    }
}

impl Index<Coord2> for Occupancy {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.mask[(x as usize, y as usize)]
    }
}
