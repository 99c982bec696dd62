mod app;
mod draw;
mod fps_limit;
mod input;
mod palette;
mod theme;

pub use app::App;
use fps_limit::FpsLimiter;
pub use input::{key_commands, pixel_to_cell, Command, KEY_BINDINGS};
pub use palette::{cell_color, render};
pub use theme::Theme;
