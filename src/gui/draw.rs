use super::{App, UiConfig};
use crate::Engine;
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, DragValue, Image, RichText, Stroke, TextureOptions,
    Ui, Vec2,
};
use egui_file::FileDialog;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(UiConfig::TEXT_COLOR)
            .size(UiConfig::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(UiConfig::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                UiConfig::BUTTON_STROKE_WIDTH,
                UiConfig::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    !self.is_running,
                    Self::new_button("Start").min_size(UiConfig::BUTTON_SIZE.into()),
                )
                .clicked()
            {
                self.start();
            }
            if ui
                .add_enabled(
                    self.is_running,
                    Self::new_button("Stop").min_size(UiConfig::BUTTON_SIZE.into()),
                )
                .clicked()
            {
                self.stop();
            }
            if ui
                .add_enabled(
                    !self.is_running,
                    Self::new_button("Next step").min_size(UiConfig::BUTTON_SIZE.into()),
                )
                .clicked()
            {
                self.do_one_step = true;
            }

            ui.add_space(UiConfig::WIDGET_GAP);
            ui.label(Self::new_text("FPS: "));
            let mut fps = self.fps;
            if ui
                .add(DragValue::new(&mut fps).range(1..=UiConfig::MAX_FPS))
                .changed()
            {
                self.set_fps(fps);
            }
        });
    }

    fn draw_file_controls(&mut self, ui: &mut Ui) {
        ui.add_enabled_ui(!self.is_running, |ui| {
            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Load")).clicked() {
                    let mut dialog = FileDialog::open_file(None);
                    dialog.open();
                    self.open_dialog = Some(dialog);
                }
                if ui.add(Self::new_button("Save")).clicked() {
                    let mut dialog = FileDialog::save_file(None);
                    dialog.open();
                    self.save_dialog = Some(dialog);
                }
                if ui.add(Self::new_button("Randomize")).clicked() {
                    self.randomize();
                }
            });
        });

        if let Some((message, is_error)) = &self.status {
            let color = if *is_error {
                UiConfig::ERROR_COLOR
            } else {
                UiConfig::TEXT_COLOR
            };
            ui.label(Self::new_text(message).color(color));
        }
    }

    fn draw_stats(&self, ui: &mut Ui) {
        let grid = self.life_engine.grid();
        ui.label(Self::new_text(&format!(
            "Generation: {}    Population: {}    Field: {}x{}",
            self.life_engine.generation(),
            self.life_engine.population(),
            grid.height(),
            grid.width(),
        )));
        ui.label(Self::new_text(&format!(
            "Last step: {:.3} ms    FPS: {:.1}",
            self.last_update_duration * 1e3,
            self.fps_limiter.fps(),
        )));
    }

    /// Rebuilds the texture when the generation shown is stale.
    fn refresh_texture(&mut self) {
        let generation = self.life_engine.generation();
        if self.texture_generation == Some(generation) {
            return;
        }
        let grid = self.life_engine.grid();
        let gray = grid
            .cells()
            .iter()
            .map(|&alive| {
                if alive {
                    UiConfig::ALIVE_COLOR
                } else {
                    UiConfig::DEAD_COLOR
                }
            })
            .collect::<Vec<_>>();
        let ci = ColorImage::from_gray([grid.width(), grid.height()], &gray);
        self.texture.set(ci, TextureOptions::NEAREST);
        self.texture_generation = Some(generation);
    }

    fn draw_gol_field(&mut self, ui: &mut Ui, area: Vec2) {
        self.refresh_texture();
        let grid = self.life_engine.grid();
        // square cells, as large as fit
        let cell_px = (area.x / grid.width() as f32).min(area.y / grid.height() as f32);
        let size = Vec2::new(grid.width() as f32, grid.height() as f32) * cell_px.max(0.);
        let source = SizedTexture::new(self.texture.id(), size);
        ui.add(Image::from_texture(source));
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Game of Life Simulation")
                    .color(UiConfig::TEXT_COLOR)
                    .size(UiConfig::TITLE_SIZE),
            );
            ui.add_space(UiConfig::WIDGET_GAP);

            let area = ui.available_size() - Vec2::new(0., UiConfig::CONTROLS_HEIGHT);
            self.draw_gol_field(ui, area);
            ui.add_space(UiConfig::WIDGET_GAP);
        });

        self.draw_simulation_controls(ui);
        self.draw_file_controls(ui);
        self.draw_stats(ui);
    }
}
