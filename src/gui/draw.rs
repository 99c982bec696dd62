use super::{render, App, Command, Theme};
use crate::AGE_LIMIT;
use eframe::egui::{
    load::SizedTexture, Button, Image, RichText, Sense, Stroke, TextureOptions, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Theme::TEXT_COLOR)
            .size(Theme::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Theme::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Theme::BUTTON_STROKE_WIDTH,
                Theme::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_buttons(&mut self, ui: &mut Ui) {
        let text = if self.life.is_running() { "Stop" } else { "Start" };
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.life.is_terminal(), Self::new_button(text))
                .clicked()
            {
                self.apply(Command::ToggleRunning);
            }
            if ui.add(Self::new_button("Random")).clicked() {
                self.apply(Command::Randomize);
            }
            if ui.add(Self::new_button("Clear")).clicked() {
                self.apply(Command::Clear);
            }
        });
        ui.label(Self::new_text(
            "Space: Start/Stop | C: Clear\nR: Random | Click: Toggle",
        ));
    }

    fn draw_stats(&self, ui: &mut Ui) {
        let stats = self.life.stats();
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
        ui.label(Self::new_text(&format!("Generation: {}", stats.generation)));
        ui.label(Self::new_text(&format!("Live Cells: {}", stats.live_cells)));
        ui.label(Self::new_text(&format!(
            "Total Dead Cells: {}",
            stats.dead_cells_total
        )));
        ui.label(Self::new_text(&format!(
            "Died Last Generation: {}",
            stats.died_last_generation
        )));
        ui.label(Self::new_text(&format!(
            "Average Cell Age: {:.2}",
            stats.average_age
        )));
        ui.label(Self::new_text(&format!("Max Cell Age: {}", stats.max_age)));
        ui.label(Self::new_text(&format!(
            "\nLast generation: {:.3} ms",
            self.last_update_duration * 1e3
        )));

        if self.life.is_terminal() {
            ui.add_space(Theme::WIDGET_GAP);
            ui.label(
                RichText::new(format!("GAME OVER! Max cell age reached {}.", AGE_LIMIT))
                    .color(Theme::GAME_OVER_COLOR)
                    .size(Theme::TEXT_SIZE),
            );
        }
    }

    pub(super) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            self.draw_buttons(ui);
            ui.add_space(Theme::WIDGET_GAP);
            self.draw_stats(ui);
        });
    }

    pub(super) fn draw_field(&mut self, ui: &mut Ui) {
        let image = render(&self.life, self.cell_size as usize);
        let size = [image.size[0] as f32, image.size[1] as f32];
        self.texture.set(image, TextureOptions::NEAREST);

        let source = SizedTexture::new(self.texture.id(), size);
        let response = ui.add(Image::from_texture(source).sense(Sense::click()));
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.apply(Command::click(pos - response.rect.left_top(), self.cell_size));
            }
        }
    }
}
