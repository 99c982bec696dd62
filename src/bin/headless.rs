//! Runs the simulation without a window until game over or a generation cap.

use aging_life::{AgingLife, ConfigArgs};
use clap::Parser;
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(about = "Run a random field without a window")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    /// Stop after this many generations
    #[arg(short, long, default_value_t = 10_000)]
    generations: u64,

    /// Log statistics every N generations (0 disables)
    #[arg(short, long, default_value_t = 100)]
    report_every: u64,

    /// Write the effective configuration (file plus overrides) to this YAML file
    #[arg(short, long)]
    write_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.config.load()?;
    if let Some(path) = &args.write_config {
        config.save(path)?;
        log::info!("wrote config to {}", path.display());
    }

    let (width, height) = config.grid_size();
    let mut life = AgingLife::with_seed(width, height, config.seed).with_fill_rate(config.fill_rate);
    life.randomize();
    life.toggle_running();
    log::info!(
        "running {}x{} field, fill rate {}, seed {:?}",
        width,
        height,
        life.fill_rate(),
        config.seed
    );

    let timer = Instant::now();
    while life.is_running() && life.stats().generation < args.generations {
        life.advance_generation();
        let stats = life.stats();
        if args.report_every != 0 && stats.generation % args.report_every == 0 {
            log::info!("{}", stats);
        }
    }
    let elapsed = timer.elapsed().as_secs_f64();

    let stats = life.stats();
    if life.is_terminal() {
        log::info!("game over: {}", stats);
    } else {
        log::info!("stopped without game over: {}", stats);
    }
    log::info!(
        "{:.1} generations per second",
        stats.generation as f64 / elapsed.max(f64::EPSILON)
    );
    Ok(())
}
