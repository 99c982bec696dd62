use aging_life::{AgingLife, Stats, AGE_LIMIT, DEAD, DEFAULT_FILL_RATE};

const SEED: u64 = 42;

fn live_count(life: &AgingLife) -> usize {
    life.cells().iter().filter(|&&c| c != DEAD).count()
}

#[test]
fn test_dead_field_stays_dead() {
    for (w, h) in [(1, 1), (3, 7), (64, 48)] {
        let mut life = AgingLife::new(w, h);
        life.toggle_running();
        for generation in 1..=5 {
            life.advance_generation();
            let stats = life.stats();
            assert_eq!(stats.generation, generation);
            assert_eq!(stats.live_cells, 0);
            assert_eq!(stats.average_age, 0.);
            assert_eq!(live_count(&life), 0);
        }
    }
}

#[test]
fn test_lonely_cell_dies_regardless_of_age() {
    // a blinker gives its centre a high age, then the arms are removed
    let mut life = AgingLife::with_seed(9, 9, Some(SEED));
    for x in 3..6 {
        life.set_cell_alive(x, 4, true);
    }
    life.toggle_running();
    for _ in 0..20 {
        life.advance_generation();
    }
    assert_eq!(life.age(4, 4), Some(20));

    life.toggle_running();
    for (x, y) in [(3, 4), (5, 4), (4, 3), (4, 5)] {
        life.set_cell_alive(x, y, false);
    }
    life.toggle_running();
    life.advance_generation();
    assert_eq!(live_count(&life), 0);
    assert_eq!(life.stats().died_last_generation, 1);
}

#[test]
fn test_birth_with_three_neighbours() {
    let mut life = AgingLife::new(5, 5);
    for (x, y) in [(1, 1), (3, 1), (2, 3)] {
        life.set_cell_alive(x, y, true);
    }
    life.toggle_running();
    life.advance_generation();
    assert_eq!(life.age(2, 2), Some(0));
    assert_eq!(life.stats().live_cells, 1);
    assert_eq!(life.stats().dead_cells_total, 3);
}

#[test]
fn test_block_is_stable() {
    let block = [(10, 10), (11, 10), (10, 11), (11, 11)];
    let mut life = AgingLife::new(30, 30);
    for &(x, y) in &block {
        life.set_cell_alive(x, y, true);
    }
    life.toggle_running();
    for _ in 0..(AGE_LIMIT - 1) {
        life.advance_generation();
        let generation = life.stats().generation as u32;
        assert_eq!(live_count(&life), 4);
        for &(x, y) in &block {
            assert_eq!(life.age(x, y), Some(generation));
        }
    }
    assert_eq!(life.stats().dead_cells_total, 0);
    assert!(!life.is_terminal());
}

#[test]
fn test_age_limit_shows_banner() {
    let mut life = AgingLife::new(40, 20);
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        life.set_cell_alive(x, y, true);
    }
    life.toggle_running();
    while life.is_running() {
        life.advance_generation();
    }
    assert!(life.is_terminal());
    assert_eq!(life.stats().max_age, AGE_LIMIT);
    assert_eq!(life.stats().generation, AGE_LIMIT as u64);

    // "GAME OVER" centered: (40 - 9) / 2 = 15, (20 - 1) / 2 = 9
    let alive = (0..40)
        .filter(|&x| life.is_alive(x, 9))
        .collect::<Vec<_>>();
    assert_eq!(alive, vec![15, 16, 17, 18, 20, 21, 22, 23]);
    assert_eq!(live_count(&life), 8);
    assert!(!life.is_alive(0, 0));
}

#[test]
fn test_clear_after_game_over() {
    let mut life = AgingLife::new(12, 12);
    for (x, y) in [(5, 5), (6, 5), (5, 6), (6, 6)] {
        life.set_cell_alive(x, y, true);
    }
    life.toggle_running();
    while life.is_running() {
        life.advance_generation();
    }
    assert!(life.is_terminal());

    life.clear();
    assert!(!life.is_terminal());
    assert_eq!(life.stats(), Stats::default());
    life.toggle_running();
    life.advance_generation();
    assert_eq!(live_count(&life), 0);
    assert_eq!(life.stats().generation, 1);
    assert_eq!(life.stats().dead_cells_total, 0);
}

#[test]
fn test_toggle_outside_field() {
    let mut life = AgingLife::new(8, 4);
    life.toggle_cell(3, 3);
    let before = life.cells().to_vec();
    for (x, y) in [(-1, 0), (8, 0), (0, -1), (0, 4), (8, 4)] {
        life.toggle_cell(x, y);
    }
    assert_eq!(life.cells(), &before[..]);
}

#[test]
fn test_randomize_fill_rate() {
    const N: usize = 100;
    for seed in [SEED, 1, 2, 3] {
        let mut life = AgingLife::with_seed(N, N, Some(seed));
        life.randomize();
        assert!(life.cells().iter().all(|&c| c == DEAD || c == 0));
        let rate = live_count(&life) as f64 / (N * N) as f64;
        assert!(
            (rate - DEFAULT_FILL_RATE).abs() < 0.02,
            "seed={} rate={}",
            seed,
            rate
        );
    }
}

#[test]
fn test_random_field_evolves_consistently() {
    let mut life = AgingLife::with_seed(64, 64, Some(SEED));
    life.randomize();
    life.toggle_running();
    let mut dead_total = 0;
    for _ in 0..100 {
        life.advance_generation();
        let stats = life.stats();
        dead_total += stats.died_last_generation as u64;
        assert_eq!(stats.dead_cells_total, dead_total);
        assert_eq!(stats.live_cells, live_count(&life));

        let ages = life
            .cells()
            .iter()
            .filter(|&&c| c != DEAD)
            .map(|&c| c as u32)
            .collect::<Vec<_>>();
        assert_eq!(stats.max_age, ages.iter().copied().max().unwrap_or(0));
        let average = if ages.is_empty() {
            0.
        } else {
            ages.iter().sum::<u32>() as f32 / ages.len() as f32
        };
        assert!((stats.average_age - average).abs() < 1e-3);
    }
}
