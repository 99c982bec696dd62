use crate::AgingLife;
use eframe::egui::{Event, Key, Vec2};

/// Discrete user command relayed to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleRunning,
    Randomize,
    Clear,
    ToggleCell(i64, i64),
}

pub const KEY_BINDINGS: [(Key, Command); 3] = [
    (Key::Space, Command::ToggleRunning),
    (Key::R, Command::Randomize),
    (Key::C, Command::Clear),
];

impl Command {
    pub fn from_key(key: Key) -> Option<Self> {
        KEY_BINDINGS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, command)| command)
    }

    /// Command for a click at `offset` pixels from the top left corner of the field.
    pub fn click(offset: Vec2, cell_size: u32) -> Self {
        let (x, y) = pixel_to_cell(offset, cell_size);
        Self::ToggleCell(x, y)
    }

    pub fn apply(self, life: &mut AgingLife) {
        log::trace!("{:?}", self);
        match self {
            Self::ToggleRunning => life.toggle_running(),
            Self::Randomize => life.randomize(),
            Self::Clear => life.clear(),
            Self::ToggleCell(x, y) => life.toggle_cell(x, y),
        }
    }
}

/// Commands for the keys pressed in this frame's input events; held keys do not repeat.
pub fn key_commands(events: &[Event]) -> Vec<Command> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => Command::from_key(*key),
            _ => None,
        })
        .collect()
}

/// Maps a pixel offset to cell coordinates; offsets left of or above the
/// field map to negative coordinates.
pub fn pixel_to_cell(offset: Vec2, cell_size: u32) -> (i64, i64) {
    let cell_size = cell_size.max(1) as i64;
    (
        (offset.x.floor() as i64).div_euclid(cell_size),
        (offset.y.floor() as i64).div_euclid(cell_size),
    )
}
