mod cli;
mod config;
mod engine;
mod gui;

pub use cli::ConfigArgs;
pub use config::Config;
pub use engine::{AgingLife, CellAge, Stats, AGE_LIMIT, DEAD, DEFAULT_FILL_RATE, GAME_OVER_BANNER};
pub use gui::{
    cell_color, key_commands, pixel_to_cell, render, App, Command, Theme, KEY_BINDINGS,
};
