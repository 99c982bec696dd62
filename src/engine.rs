mod banner;
mod stats;

pub use banner::GAME_OVER_BANNER;
pub use stats::Stats;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Age of a cell: `DEAD` or the number of generations survived since birth.
pub type CellAge = i32;

pub const DEAD: CellAge = -1;

/// Reaching this age in any cell ends the game.
pub const AGE_LIMIT: u32 = 500;

/// Probability of a cell being alive after `randomize`.
pub const DEFAULT_FILL_RATE: f64 = 0.15;

/// Bounded (no wraparound) Game of Life field where every live cell
/// remembers how many generations it has survived.
pub struct AgingLife {
    cells_curr: Vec<CellAge>,
    cells_next: Vec<CellAge>,
    width: usize,
    height: usize,
    running: bool,
    terminal: bool,
    stats: Stats,
    fill_rate: f64,
    rng: ChaCha8Rng,
}

impl AgingLife {
    /// Create a dead field of `width x height` cells with an entropy-seeded RNG.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_seed(width, height, None)
    }

    /// Create a dead field of `width x height` cells.
    ///
    /// `seed` - random seed for `randomize` (if `None`, then random seed is generated)
    pub fn with_seed(width: usize, height: usize, seed: Option<u64>) -> Self {
        let rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let size = width * height;
        Self {
            cells_curr: vec![DEAD; size],
            cells_next: vec![DEAD; size],
            width,
            height,
            running: false,
            terminal: false,
            stats: Stats::default(),
            fill_rate: DEFAULT_FILL_RATE,
            rng,
        }
    }

    pub fn with_fill_rate(mut self, fill_rate: f64) -> Self {
        self.fill_rate = fill_rate.clamp(0., 1.);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fill_rate(&self) -> f64 {
        self.fill_rate
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Row-major view of the current generation (`x + y * width`).
    pub fn cells(&self) -> &[CellAge] {
        &self.cells_curr
    }

    /// Raw cell value, `None` outside the field.
    pub fn cell(&self, x: i64, y: i64) -> Option<CellAge> {
        self.index(x, y).map(|i| self.cells_curr[i])
    }

    /// Age of a live cell; `None` for dead cells and outside the field.
    pub fn age(&self, x: i64, y: i64) -> Option<u32> {
        self.cell(x, y)
            .filter(|&age| age != DEAD)
            .map(|age| age as u32)
    }

    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.age(x, y).is_some()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(x + y * self.width)
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        let (x1, x2) = (x.saturating_sub(1), (x + 1).min(self.width - 1));
        let (y1, y2) = (y.saturating_sub(1), (y + 1).min(self.height - 1));
        let mut count = 0;
        for ny in y1..=y2 {
            for nx in x1..=x2 {
                if (nx, ny) != (x, y) && self.cells_curr[nx + ny * self.width] != DEAD {
                    count += 1;
                }
            }
        }
        count
    }

    /// Computes one generation if the simulation is running.
    ///
    /// All statistics are recomputed from the new generation. Crossing
    /// `AGE_LIMIT` stops the simulation and replaces the field with the
    /// game over banner before anyone can observe it.
    pub fn advance_generation(&mut self) {
        if !self.running || self.terminal {
            return;
        }

        let mut live_cells = 0;
        let mut died = 0;
        let mut total_age = 0u64;
        let mut max_age = 0u32;

        for y in 0..self.height {
            for x in 0..self.width {
                let i = x + y * self.width;
                let neibs = self.count_neibs(x, y);
                let curr = self.cells_curr[i];
                let next = match (curr != DEAD, neibs) {
                    (true, 2 | 3) => curr + 1,
                    (true, _) => {
                        died += 1;
                        DEAD
                    }
                    (false, 3) => 0,
                    (false, _) => DEAD,
                };
                self.cells_next[i] = next;

                if next != DEAD {
                    live_cells += 1;
                    total_age += next as u64;
                    max_age = max_age.max(next as u32);
                }
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);

        let generation = self.stats.generation + 1;
        self.stats = Stats {
            generation,
            live_cells,
            dead_cells_total: self.stats.dead_cells_total + died as u64,
            died_last_generation: died,
            average_age: if live_cells > 0 {
                total_age as f32 / live_cells as f32
            } else {
                0.
            },
            max_age,
        };

        if max_age >= AGE_LIMIT {
            log::info!(
                "game over at generation {}: a cell reached age {}",
                generation,
                max_age
            );
            self.terminal = true;
            self.running = false;
            self.enter_terminal_display();
        }
    }

    /// Starts or pauses the simulation. Does nothing after game over.
    pub fn toggle_running(&mut self) {
        if !self.terminal {
            self.running = !self.running;
        }
    }

    /// Out-of-field coordinates are ignored. New cells are born with age 0.
    pub fn set_cell_alive(&mut self, x: i64, y: i64, alive: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells_curr[i] = if alive { 0 } else { DEAD };
        }
    }

    pub fn toggle_cell(&mut self, x: i64, y: i64) {
        if let Some(i) = self.index(x, y) {
            self.cells_curr[i] = if self.cells_curr[i] == DEAD { 0 } else { DEAD };
        }
    }

    /// Fills the field with newborn cells with probability `fill_rate`.
    ///
    /// Resets statistics and game over, but keeps the run/pause flag.
    pub fn randomize(&mut self) {
        let fill_rate = self.fill_rate;
        for cell in self.cells_curr.iter_mut() {
            *cell = if self.rng.gen_bool(fill_rate) { 0 } else { DEAD };
        }
        self.reset_counters();
        log::debug!(
            "randomized {}x{} field with fill rate {}",
            self.width,
            self.height,
            fill_rate
        );
    }

    /// Kills every cell. Resets statistics and game over, but keeps the run/pause flag.
    pub fn clear(&mut self) {
        self.cells_curr.fill(DEAD);
        self.reset_counters();
        log::debug!("cleared {}x{} field", self.width, self.height);
    }

    fn reset_counters(&mut self) {
        self.stats = Stats::default();
        self.terminal = false;
    }

    /// Kills every cell and writes `GAME_OVER_BANNER` with newborn cells,
    /// centered on the field. Parts that do not fit are dropped.
    pub fn enter_terminal_display(&mut self) {
        self.cells_curr.fill(DEAD);
        for (x, y) in banner::layout(GAME_OVER_BANNER, self.width, self.height) {
            self.set_cell_alive(x, y, true);
        }
    }
}
