mod cli;
mod config;
mod fps_limit;

pub use cli::{about, help, parse_args, usage, Command};
pub use config::Config;
pub use fps_limit::FpsLimiter;
