use super::{fate, live_neighbors, Engine};
use crate::Grid;

/// Evaluates every cell of the field on each step.
#[derive(Clone)]
pub struct NaiveEngine {
    cells_curr: Grid,
    cells_next: Grid,
    generation: u64,
}

impl Engine for NaiveEngine {
    fn from_grid(grid: Grid) -> Self {
        Self {
            cells_next: grid.dead_like(),
            cells_curr: grid,
            generation: 0,
        }
    }

    fn step(&mut self) -> &Grid {
        for row in 0..self.cells_curr.height() {
            for col in 0..self.cells_curr.width() {
                let neibs = live_neighbors(&self.cells_curr, (row, col));
                let next = fate(self.cells_curr.get(row, col), neibs);
                self.cells_next.set(row, col, next);
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
        &self.cells_curr
    }

    fn grid(&self) -> &Grid {
        &self.cells_curr
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}
