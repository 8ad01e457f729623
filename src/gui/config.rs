use eframe::egui::Color32;

/// Appearance constants of the window.
pub struct UiConfig;

impl UiConfig {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const TITLE_SIZE: f32 = 22.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BUTTON_SIZE: [f32; 2] = [110., 30.];
    pub const CONTROLS_HEIGHT: f32 = 120.;
    pub const WIDGET_GAP: f32 = 10.;

    pub const DEAD_COLOR: u8 = 0x00;
    pub const ALIVE_COLOR: u8 = 0xff;
    pub const MAX_FPS: u32 = 120;
}
