use super::{fate, live_neighbors, neighbors, Engine};
use crate::{Coord, Grid};
use ahash::AHashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Tracks the alive cells so that a step only visits them and their dead neighbors.
///
/// Dead cells with no alive neighbor stay dead under B3/S23, so skipping them is exact.
/// The cost of a step is proportional to the population, degrading to the full
/// field when almost every cell is alive.
#[derive(Clone)]
pub struct SparseEngine {
    grid: Grid,
    alive: Vec<Coord>, // Alive cells of `grid`, in discovery order.
    generation: u64,
}

impl SparseEngine {
    /// Alive cells of the current generation; no duplicates.
    pub fn alive_cells(&self) -> &[Coord] {
        &self.alive
    }

    /// Computes the alive cells of the next generation.
    fn next_alive(&self) -> Vec<Coord> {
        let (height, width) = (self.grid.height(), self.grid.width());
        // Fates of dead cells bordering the population, valid for this step only.
        let mut explored = AHashMap::<Coord, bool>::new();
        let mut next_alive = Vec::with_capacity(self.alive.len());

        for &cell in &self.alive {
            let mut count = 0;
            for nbr in neighbors(height, width, cell) {
                if self.grid.get(nbr.0, nbr.1) {
                    count += 1;
                    continue;
                }
                if let Entry::Vacant(e) = explored.entry(nbr) {
                    let born = *e.insert(fate(false, live_neighbors(&self.grid, nbr)));
                    if born {
                        next_alive.push(nbr);
                    }
                }
            }
            if fate(true, count) {
                next_alive.push(cell);
            }
        }
        next_alive
    }
}

impl Engine for SparseEngine {
    fn from_grid(grid: Grid) -> Self {
        let alive = grid.alive_cells().collect();
        Self {
            grid,
            alive,
            generation: 0,
        }
    }

    fn step(&mut self) -> &Grid {
        let alive = self.next_alive();
        let mut grid = self.grid.dead_like();
        for &(row, col) in &alive {
            grid.set(row, col, true);
        }
        // both replaced together, never observable half-updated
        self.grid = grid;
        self.alive = alive;
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.alive.len(),
            "step"
        );
        &self.grid
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> usize {
        self.alive.len()
    }
}
