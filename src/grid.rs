use crate::LifeError;
use std::{fmt, fs, path::Path};

/// `(row, column)`, both 0-indexed.
pub type Coord = (usize, usize);

/// Rectangular field of binary cells stored row-major; `true` is alive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    height: usize,
    width: usize,
}

impl Grid {
    /// All-dead field with the dimensions of `self`.
    pub(crate) fn dead_like(&self) -> Self {
        Self {
            cells: vec![false; self.cells.len()],
            height: self.height,
            width: self.width,
        }
    }

    /// Largest number of cells a field may hold.
    pub const MAX_CELLS: usize = 1 << 30;

    /// Returns the number of cells of a `height x width` field.
    fn check_dims(height: usize, width: usize) -> Result<usize, LifeError> {
        if height == 0 || width == 0 {
            return Err(LifeError::EmptyGrid { height, width });
        }
        match height.checked_mul(width) {
            Some(size) if size <= Self::MAX_CELLS => Ok(size),
            _ => Err(LifeError::TooLarge { height, width }),
        }
    }

    /// Creates an all-dead grid.
    pub fn blank(height: usize, width: usize) -> Result<Self, LifeError> {
        let size = Self::check_dims(height, width)?;
        Ok(Self {
            cells: vec![false; size],
            height,
            width,
        })
    }

    /// Creates a grid where exactly `alive` cells are alive.
    ///
    /// Panics if a coordinate lies outside the grid.
    pub fn from_alive_cells(
        height: usize,
        width: usize,
        alive: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, LifeError> {
        let mut grid = Self::blank(height, width)?;
        for (row, col) in alive {
            grid.set(row, col, true);
        }
        Ok(grid)
    }

    /// Builds a grid from integer rows; values must be 0 or 1 and all rows equally long.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, LifeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let size = Self::check_dims(height, width)?;

        let mut cells = Vec::with_capacity(size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(LifeError::JaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(LifeError::NonBinaryCell { row, col, value }),
                }
            }
        }
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Fills a grid with cells that are alive with probability `fill_rate`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(
        height: usize,
        width: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, LifeError> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let size = Self::check_dims(height, width)?;
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let fill_rate = fill_rate.clamp(0., 1.);
        let cells = (0..size)
            .map(|_| rng.gen_bool(fill_rate))
            .collect();
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Parses a whitespace-separated integer matrix, one row per line.
    pub fn parse(text: &str) -> Result<Self, LifeError> {
        let mut rows = vec![];
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| LifeError::Parse {
                        line: i + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LifeError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LifeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Writes the grid in the same format `parse` accepts.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LifeError> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| LifeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height && col < self.width);
        self.cells[col + row * self.width]
    }

    pub fn set(&mut self, row: usize, col: usize, state: bool) {
        assert!(row < self.height && col < self.width);
        self.cells[col + row * self.width] = state;
    }

    /// Row-major cell states.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of the alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / width, i % width))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.width) {
            for (col, &alive) in row.iter().enumerate() {
                if col != 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if alive { "1" } else { "0" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
