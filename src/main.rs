#![warn(clippy::all)]

use aging_life::{App, ConfigArgs, Theme};
use anyhow::anyhow;
use clap::Parser;

#[derive(Parser)]
#[command(about = "Game of Life where no cell may live to 500")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    use eframe::egui::ViewportBuilder;

    let config = Args::parse().config.load()?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(Theme::WINDOW_TITLE)
            .with_inner_size(App::window_size(&config))
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        Theme::WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, &config)))),
    )
    .map_err(|e| anyhow!("window failed: {e}"))
}
