//! Deploy-time configuration.
//!
//! Read once at startup from `vorometric.yaml` in the working directory,
//! or from the path named by `VOROMETRIC_CONFIG`. The output directory and
//! the font path are required and have no defaults.

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

const CONFIG_ENV: &str = "VOROMETRIC_CONFIG";
const CONFIG_FILE: &str = "vorometric.yaml";

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory the PNGs are written into. Must already exist.
    pub output_dir: PathBuf,
    /// Path to a .ttf file used for the caption.
    pub font_path: PathBuf,
    /// Session seed; omitted means a fresh random seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_site_count")]
    pub site_count: usize,
    #[serde(default = "default_show_sites")]
    pub show_sites: bool,
}

fn default_width() -> u32 {
    500
}
fn default_height() -> u32 {
    500
}
fn default_site_count() -> usize {
    20
}
fn default_show_sites() -> bool {
    true
}

impl Config {
    /// Load and validate the configuration file.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {:?}", path))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.width > 0, "width must be positive");
        anyhow::ensure!(self.height > 0, "height must be positive");
        anyhow::ensure!(self.site_count > 0, "site_count must be positive");
        Ok(())
    }
}
