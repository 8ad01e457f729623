use super::UiConfig;
use crate::{Config, Engine, FpsLimiter, Grid, SparseEngine};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle,
};
use egui_file::{FileDialog, State};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

pub struct App {
    pub(super) life_engine: SparseEngine, // Conway's GoL engine.
    pub(super) is_running: bool,          // Whether a step is taken on every tick.
    pub(super) do_one_step: bool,         // Do one step while paused.
    pub(super) fps: u32,                  // Target number of steps per second.
    pub(super) fill_rate: f64,            // Fill rate used by "Randomize".
    pub(super) last_update_duration: f64, // Duration of the last step in seconds.
    pub(super) texture: TextureHandle,    // Texture handle of the field.
    pub(super) texture_generation: Option<u64>, // Generation shown by `texture`.
    pub(super) fps_limiter: FpsLimiter,
    pub(super) open_dialog: Option<FileDialog>,
    pub(super) save_dialog: Option<FileDialog>,
    pub(super) status: Option<(String, bool)>, // Last load/save message and whether it is an error.
}

impl App {
    pub fn new(ctx: &Context, config: &Config, grid: Grid) -> Self {
        Self {
            life_engine: SparseEngine::from_grid(grid),
            is_running: false,
            do_one_step: false,
            fps: config.fps,
            fill_rate: config.fill_rate,
            last_update_duration: 0.,
            texture: ctx.load_texture(
                "Conway's GoL field",
                ColorImage::default(),
                Default::default(),
            ),
            texture_generation: None,
            fps_limiter: FpsLimiter::new(config.fps),
            open_dialog: None,
            save_dialog: None,
            status: None,
        }
    }

    pub fn start(&mut self) {
        if !self.is_running {
            info!(generation = self.life_engine.generation(), "simulation started");
            self.fps_limiter.reset();
        }
        self.is_running = true;
    }

    pub fn stop(&mut self) {
        if self.is_running {
            info!(generation = self.life_engine.generation(), "simulation stopped");
        }
        self.is_running = false;
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.clamp(1, UiConfig::MAX_FPS);
        self.fps_limiter.set_max_fps(self.fps);
    }

    fn replace_engine(&mut self, engine: SparseEngine) {
        self.life_engine = engine;
        self.texture_generation = None;
        self.last_update_duration = 0.;
    }

    pub fn load(&mut self, path: &Path) {
        match SparseEngine::load(path) {
            Ok(engine) => {
                let grid = engine.grid();
                info!(
                    path = %path.display(),
                    height = grid.height(),
                    width = grid.width(),
                    "field loaded"
                );
                self.status = Some((format!("Loaded {}", path.display()), false));
                self.stop();
                self.replace_engine(engine);
            }
            Err(e) => {
                warn!("failed to load field: {}", e);
                self.status = Some((e.to_string(), true));
            }
        }
    }

    pub fn save(&mut self, path: &Path) {
        match self.life_engine.grid().save(path) {
            Ok(()) => {
                info!(
                    path = %path.display(),
                    generation = self.life_engine.generation(),
                    "field saved"
                );
                self.status = Some((format!("Saved {}", path.display()), false));
            }
            Err(e) => {
                warn!("failed to save field: {}", e);
                self.status = Some((e.to_string(), true));
            }
        }
    }

    pub fn randomize(&mut self) {
        let grid = self.life_engine.grid();
        match SparseEngine::random(grid.height(), grid.width(), None, self.fill_rate) {
            Ok(engine) => {
                info!(population = engine.population(), "field randomized");
                self.replace_engine(engine);
            }
            Err(e) => warn!("failed to randomize field: {}", e),
        }
    }

    fn update_engine(&mut self) {
        let tick = self.is_running && self.fps_limiter.tick();
        if !tick && !self.do_one_step {
            return;
        }

        let timer = Instant::now();
        self.life_engine.step();
        self.last_update_duration = timer.elapsed().as_secs_f64();
        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (one_step, toggle) =
            ctx.input(|input| (input.key_pressed(Key::Space), input.key_pressed(Key::E)));
        if one_step && !self.is_running {
            self.do_one_step = true;
        }
        if toggle {
            if self.is_running {
                self.stop();
            } else {
                self.start();
            }
        }
    }

    fn poll_dialogs(&mut self, ctx: &Context) {
        if let Some(path) = poll_dialog(&mut self.open_dialog, ctx) {
            self.load(&path);
        }
        if let Some(path) = poll_dialog(&mut self.save_dialog, ctx) {
            self.save(&path);
        }
    }
}

/// Shows the dialog and returns the chosen path once it is confirmed.
///
/// The slot is emptied as soon as the dialog is no longer open.
fn poll_dialog(dialog: &mut Option<FileDialog>, ctx: &Context) -> Option<PathBuf> {
    let d = dialog.as_mut()?;
    let path = match d.show(ctx).state() {
        State::Open => return None,
        State::Selected => d.path().map(Path::to_path_buf),
        State::Closed | State::Cancelled => None,
    };
    *dialog = None;
    path
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.update_engine();

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(UiConfig::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                self.draw(ui);
            });

        self.poll_dialogs(ctx);

        if self.do_one_step {
            ctx.request_repaint();
        } else if self.is_running {
            ctx.request_repaint_after(self.fps_limiter.remaining());
        }
    }
}
