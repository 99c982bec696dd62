use crate::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Command line options shared by the binaries; they override the config file.
#[derive(clap::Args, Debug, Default)]
pub struct ConfigArgs {
    /// YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for randomizing the field
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Side of a cell in pixels
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Width of the field in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Height of the field in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

impl ConfigArgs {
    /// Reads the config file if one was given, applies the overrides and
    /// initializes logging.
    pub fn load(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(width) = self.width {
            config.field_width = width;
        }
        if let Some(height) = self.height {
            config.field_height = height;
        }
        config.validate()?;

        let env = env_logger::Env::default().default_filter_or(&config.log_level);
        if env_logger::Builder::from_env(env).try_init().is_err() {
            log::warn!("logger already initialized");
        }
        match &self.config {
            Some(path) => log::info!("loaded config from {}", path.display()),
            None => log::info!("using default configuration"),
        }
        Ok(config)
    }
}
