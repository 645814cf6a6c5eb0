use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered body cells, head first and tail last. Never empty.
///
/// Movement builds a new `Snake` instead of editing the current one, so a
/// session that was cloned before a tick still describes the old board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Coord2>,
}

impl Snake {
    pub fn new(head: Coord2) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Builds a snake from cells listed head first. The cells must be
    /// distinct and each one orthogonally adjacent to the next.
    pub fn from_cells(cells: impl IntoIterator<Item = Coord2>) -> Result<Self> {
        let body: VecDeque<Coord2> = cells.into_iter().collect();
        if body.is_empty() {
            return Err(GameError::EmptySnake);
        }

        for (i, &cell) in body.iter().enumerate() {
            if body.iter().skip(i + 1).any(|&other| other == cell) {
                return Err(GameError::OverlappingSnake);
            }
        }

        let adjacent = |(ax, ay): Coord2, (bx, by): Coord2| ax.abs_diff(bx) + ay.abs_diff(by) == 1;
        if !body
            .iter()
            .zip(body.iter().skip(1))
            .all(|(&a, &b)| adjacent(a, b))
        {
            return Err(GameError::DisconnectedSnake);
        }

        Ok(Self { body })
    }

    pub fn head(&self) -> Coord2 {
        self.body[0]
    }

    pub fn tail(&self) -> Coord2 {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> CellCount {
        self.body.len().try_into().unwrap_or(CellCount::MAX)
    }

    /// Always `false`: a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.body.contains(&coords)
    }

    /// Whether moving the head onto `coords` runs into the body. The tail
    /// cell does not count because it moves away during the same tick.
    pub fn would_collide(&self, coords: Coord2) -> bool {
        let keep = self.body.len() - 1;
        Grid::collides_with_body(coords, self.body.iter().take(keep))
    }

    /// Same length, shifted one cell towards `head`.
    pub fn slithered(&self, head: Coord2) -> Self {
        let mut body = self.body.clone();
        body.push_front(head);
        body.pop_back();
        Self { body }
    }

    /// One cell longer, tail kept in place.
    pub fn grown(&self, head: Coord2) -> Self {
        let mut body = VecDeque::with_capacity(self.body.len() + 1);
        body.push_back(head);
        body.extend(self.body.iter().copied());
        Self { body }
    }

    pub fn occupancy(&self, grid: Grid) -> Occupancy {
        Occupancy::from_cells(grid, self.cells())
    }
}
