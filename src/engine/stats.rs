/// Counters describing the current generation, recomputed on every advance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    /// Generations computed since the last reset.
    pub generation: u64,
    pub live_cells: usize,
    /// Deaths summed over all generations since the last reset.
    pub dead_cells_total: u64,
    pub died_last_generation: usize,
    /// Mean age of live cells, 0 when there are none.
    pub average_age: f32,
    pub max_age: u32,
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "generation {}, live {}, died {} (total {}), average age {:.2}, max age {}",
            self.generation,
            self.live_cells,
            self.died_last_generation,
            self.dead_cells_total,
            self.average_age,
            self.max_age
        )
    }
}
