use eframe::egui::Color32;

pub struct Theme;

impl Theme {
    pub const WINDOW_TITLE: &'static str = "Aging Life - don't let cells age to 500!";

    pub const FRAME_MARGIN: f32 = 10.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const GAME_OVER_COLOR: Color32 = Color32::RED;
    pub const BUTTON_STROKE_WIDTH: f32 = 2.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::from_gray(60);

    pub const WIDGET_GAP: f32 = 20.;

    pub const DEAD_COLOR: Color32 = Color32::BLACK;
    pub const GRID_LINE_COLOR: Color32 = Color32::from_gray(40);
    /// Colour of a newborn cell
    pub const YOUNG_COLOR: Color32 = Color32::from_rgb(40, 220, 90);
    /// Colour of a cell at the age limit
    pub const OLD_COLOR: Color32 = Color32::from_rgb(230, 60, 200);
}
