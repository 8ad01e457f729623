mod naive;
mod rules;
mod sparse;
#[cfg(test)]
mod tests;

use crate::{Grid, LifeError};
use std::path::Path;

pub use naive::NaiveEngine;
pub use rules::{fate, live_neighbors, neighbors};
pub use sparse::SparseEngine;

/// Engine trait for Game of Life on a bounded (non-wrapping) field with B3/S23 rules.
pub trait Engine {
    /// Takes ownership of the initial generation.
    fn from_grid(grid: Grid) -> Self
    where
        Self: Sized;

    /// Create a field with random cells
    ///
    /// `fill_rate` - probability of cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    fn random(
        height: usize,
        width: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, LifeError>
    where
        Self: Sized,
    {
        Ok(Self::from_grid(Grid::random(height, width, seed, fill_rate)?))
    }

    /// Load the field from a whitespace-separated 0/1 matrix file
    fn load(path: impl AsRef<Path>) -> Result<Self, LifeError>
    where
        Self: Sized,
    {
        Ok(Self::from_grid(Grid::load(path)?))
    }

    /// Advances one generation and returns the new one.
    fn step(&mut self) -> &Grid;

    /// Update the field `n` times
    fn update(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Current generation; the borrow cannot outlive the next `step`.
    fn grid(&self) -> &Grid;

    /// Number of steps taken since construction.
    fn generation(&self) -> u64;

    fn population(&self) -> usize {
        self.grid().population()
    }
}
