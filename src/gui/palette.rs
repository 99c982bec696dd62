use super::Theme;
use crate::{AgingLife, CellAge, AGE_LIMIT, DEAD};
use eframe::egui::{Color32, ColorImage};

/// Colour of a cell: dead cells are black, live ones drift from
/// `YOUNG_COLOR` to `OLD_COLOR` as they approach the age limit.
pub fn cell_color(cell: CellAge) -> Color32 {
    if cell == DEAD {
        return Theme::DEAD_COLOR;
    }
    let t = (cell as f32 / AGE_LIMIT as f32).clamp(0., 1.);
    let (a, b) = (Theme::YOUNG_COLOR, Theme::OLD_COLOR);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Renders the field with `cell_size` pixels per cell side; the last
/// pixel row and column of every cell is a grid line.
pub fn render(life: &AgingLife, cell_size: usize) -> ColorImage {
    let (w, h) = (life.width() * cell_size, life.height() * cell_size);
    let mut image = ColorImage::new([w, h], Theme::GRID_LINE_COLOR);
    let inner = cell_size.saturating_sub(1).max(1);

    for (i, &cell) in life.cells().iter().enumerate() {
        let color = cell_color(cell);
        let (x0, y0) = ((i % life.width()) * cell_size, (i / life.width()) * cell_size);
        for y in y0..y0 + inner {
            image.pixels[y * w + x0..y * w + x0 + inner].fill(color);
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_color_by_age() {
        assert_eq!(cell_color(DEAD), Theme::DEAD_COLOR);
        assert_eq!(cell_color(0), Theme::YOUNG_COLOR);
        assert_eq!(cell_color(AGE_LIMIT as CellAge), Theme::OLD_COLOR);
        assert_eq!(cell_color(10 * AGE_LIMIT as CellAge), Theme::OLD_COLOR);

        let mid = cell_color(AGE_LIMIT as CellAge / 2);
        assert_ne!(mid, Theme::YOUNG_COLOR);
        assert_ne!(mid, Theme::OLD_COLOR);
    }

    #[test]
    fn test_render() {
        let mut life = AgingLife::new(3, 2);
        life.set_cell_alive(1, 1, true);
        let image = render(&life, 4);
        assert_eq!(image.size, [12, 8]);

        let px = |x: usize, y: usize| image.pixels[y * 12 + x];
        assert_eq!(px(0, 0), Theme::DEAD_COLOR);
        assert_eq!(px(3, 0), Theme::GRID_LINE_COLOR);
        assert_eq!(px(0, 3), Theme::GRID_LINE_COLOR);
        assert_eq!(px(4, 4), Theme::YOUNG_COLOR);
        assert_eq!(px(6, 6), Theme::YOUNG_COLOR);
        assert_eq!(px(7, 7), Theme::GRID_LINE_COLOR);
        assert_eq!(px(8, 4), Theme::DEAD_COLOR);
    }

    #[test]
    fn test_render_single_pixel_cells() {
        let mut life = AgingLife::new(2, 2);
        life.set_cell_alive(0, 1, true);
        let image = render(&life, 1);
        assert_eq!(
            image.pixels,
            vec![
                Theme::DEAD_COLOR,
                Theme::DEAD_COLOR,
                Theme::YOUNG_COLOR,
                Theme::DEAD_COLOR
            ]
        );
    }
}
