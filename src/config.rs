//! Startup configuration, optionally loaded from a YAML file.

use crate::DEFAULT_FILL_RATE;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Side of a cell in pixels
    pub cell_size: u32,
    /// Width of the field in pixels
    pub field_width: u32,
    /// Height of the field in pixels
    pub field_height: u32,
    /// Frame cap; one generation is computed per frame while running
    pub ticks_per_second: f64,
    /// Probability of a cell being alive after randomizing (0.0 - 1.0)
    pub fill_rate: f64,
    /// Seed for randomizing; a random one is used when absent
    pub seed: Option<u64>,
    /// Default log filter (error, warn, info, debug, trace), overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_size: 10,
            field_width: 1024,
            field_height: 768,
            ticks_per_second: 15.,
            fill_rate: DEFAULT_FILL_RATE,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)
            .with_context(|| format!("failed to write config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be > 0");
        ensure!(
            self.field_width >= self.cell_size && self.field_height >= self.cell_size,
            "field ({}x{} px) must fit at least one {} px cell",
            self.field_width,
            self.field_height,
            self.cell_size
        );
        ensure!(
            self.ticks_per_second > 0.,
            "ticks_per_second must be > 0, got {}",
            self.ticks_per_second
        );
        ensure!(
            (0.0..=1.0).contains(&self.fill_rate),
            "fill_rate must be between 0 and 1, got {}",
            self.fill_rate
        );
        Ok(())
    }

    /// Number of whole cells that fit the field horizontally and vertically.
    pub fn grid_size(&self) -> (usize, usize) {
        (
            (self.field_width / self.cell_size) as usize,
            (self.field_height / self.cell_size) as usize,
        )
    }
}
