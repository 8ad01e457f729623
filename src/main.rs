#![warn(clippy::all)]

use sparse_life::{App, Command, Config, LifeError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn run(config: Config) -> Result<(), LifeError> {
    use eframe::egui::{vec2, ViewportBuilder};

    let grid = config.initial_grid()?;
    info!(fps = config.fps, "opening window");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Game of Life")
            .with_inner_size(vec2(800., 900.))
            .with_min_inner_size(vec2(480.0, 540.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, &config, grid)))),
    )
    .map_err(|e| LifeError::Window(e.to_string()))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sparse_life=info")),
        )
        .init();

    let result = sparse_life::parse_args(std::env::args().skip(1)).and_then(|command| {
        match command {
            Command::Run(config) => run(config)?,
            Command::Usage(config) => print!("{}", sparse_life::usage(&config)),
            Command::Help => print!("{}", sparse_life::help()),
            Command::About => print!("{}", sparse_life::about()),
        }
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        eprintln!("For usage run:\n\tsparse-life --usage");
        std::process::exit(1);
    }
}
