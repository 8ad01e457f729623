mod app;
mod config;
mod draw;

pub use app::App;
use config::UiConfig;
