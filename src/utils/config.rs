use crate::{Grid, LifeError};
use std::path::PathBuf;
use tracing::info;

/// Run configuration, built once from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub height: usize,
    pub width: usize,
    pub fps: u32,
    pub input: Option<PathBuf>, // Initial field file; overrides `height` and `width`.
    pub seed: Option<u64>,      // Seed for the random initial field.
    pub fill_rate: f64,         // Probability of a random cell being alive.
}

impl Default for Config {
    fn default() -> Self {
        Self {
            height: Self::DEFAULT_HEIGHT,
            width: Self::DEFAULT_WIDTH,
            fps: Self::DEFAULT_FPS,
            input: None,
            seed: None,
            fill_rate: Self::DEFAULT_FILL_RATE,
        }
    }
}

impl Config {
    pub const DEFAULT_HEIGHT: usize = 15;
    pub const DEFAULT_WIDTH: usize = 15;
    pub const DEFAULT_FPS: u32 = 3;
    pub const DEFAULT_FILL_RATE: f64 = 0.5;

    /// Loads `input` if given, otherwise generates a random `height x width` field.
    pub fn initial_grid(&self) -> Result<Grid, LifeError> {
        let grid = match &self.input {
            Some(path) => {
                let grid = Grid::load(path)?;
                info!(path = %path.display(), "loaded initial field");
                grid
            }
            None => Grid::random(self.height, self.width, self.seed, self.fill_rate)?,
        };
        info!(
            height = grid.height(),
            width = grid.width(),
            population = grid.population(),
            "initial field ready"
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_args, Command};

    #[test]
    fn oversized_dimensions_are_an_error() {
        let Command::Run(config) = parse_args(["-h", "18446744073709551615", "-w", "2"]).unwrap()
        else {
            panic!("expected run");
        };
        assert!(matches!(
            config.initial_grid(),
            Err(LifeError::TooLarge { width: 2, .. })
        ));
    }

    #[test]
    fn random_initial_grid_uses_dimensions() {
        let config = Config {
            height: 4,
            width: 9,
            seed: Some(3),
            ..Config::default()
        };
        let grid = config.initial_grid().unwrap();
        assert_eq!((grid.height(), grid.width()), (4, 9));
        assert_eq!(grid, config.initial_grid().unwrap());
    }
}
