mod engine;
mod error;
mod grid;
mod gui;
mod utils;

pub use engine::{fate, live_neighbors, neighbors, Engine, NaiveEngine, SparseEngine};
pub use error::LifeError;
pub use grid::{Coord, Grid};
pub use gui::App;
pub use utils::{about, help, parse_args, usage, Command, Config, FpsLimiter};
