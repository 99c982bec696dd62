use super::{key_commands, Command, FpsLimiter, Theme};
use crate::{AgingLife, Config};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame, Margin, SidePanel, TextureHandle, TextureOptions,
};
use std::time::Instant;

pub struct App {
    pub(super) life: AgingLife,              // Simulation engine.
    pub(super) cell_size: u32,               // Side of a cell in pixels.
    pub(super) texture: TextureHandle,       // Texture handle of the rendered field.
    pub(super) fps_limiter: FpsLimiter,      // Limits the frame rate to the tick rate.
    pub(super) last_update_duration: f64,    // Duration of the last generation in seconds.
}

impl App {
    pub fn new(ctx: &Context, config: &Config) -> Self {
        let (width, height) = config.grid_size();
        let life = AgingLife::with_seed(width, height, config.seed).with_fill_rate(config.fill_rate);
        log::info!(
            "{}x{} cells of {} px, {} ticks per second",
            width,
            height,
            config.cell_size,
            config.ticks_per_second
        );
        Self {
            life,
            cell_size: config.cell_size,
            texture: ctx.load_texture("field", ColorImage::default(), TextureOptions::NEAREST),
            fps_limiter: FpsLimiter::new(config.ticks_per_second),
            last_update_duration: 0.,
        }
    }

    /// Size of the window content needed to show the whole field.
    pub fn window_size(config: &Config) -> [f32; 2] {
        let (width, height) = config.grid_size();
        let cell_size = config.cell_size as f32;
        [
            width as f32 * cell_size + Theme::CONTROL_PANEL_WIDTH + 4. * Theme::FRAME_MARGIN,
            height as f32 * cell_size + 2. * Theme::FRAME_MARGIN,
        ]
    }

    fn handle_keys(&mut self, ctx: &Context) {
        for command in ctx.input(|input| key_commands(&input.events)) {
            self.apply(command);
        }
    }

    pub(super) fn apply(&mut self, command: Command) {
        let was_terminal = self.life.is_terminal();
        command.apply(&mut self.life);
        if was_terminal && !self.life.is_terminal() {
            log::info!("new game after {:?}", command);
        }
    }

    fn update_engine(&mut self) {
        if !self.life.is_running() {
            return;
        }
        let timer = Instant::now();
        self.life.advance_generation();
        self.last_update_duration = timer.elapsed().as_secs_f64();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.update_engine();

        SidePanel::left("controls")
            .exact_width(Theme::CONTROL_PANEL_WIDTH)
            .frame(Frame::side_top_panel(&ctx.style()).inner_margin(Margin::same(Theme::FRAME_MARGIN)))
            .show(ctx, |ui| self.draw_controls(ui));

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Theme::FRAME_MARGIN))
                    .fill(Theme::DEAD_COLOR),
            )
            .show(ctx, |ui| {
                // the field changes every tick, so keep repainting
                ctx.request_repaint();
                self.draw_field(ui);
            });

        self.fps_limiter.delay();
    }
}
