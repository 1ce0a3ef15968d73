//! Load carousel settings from the command line and config file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info};
use slider::SliderConfig;

use crate::error::RuntimeError;
use crate::paths;

/// Where the settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// `--config <path>`: the file must exist.
    Explicit(PathBuf),
    /// Platform config dir: used if present.
    Default(Option<PathBuf>),
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "barbershop")]
#[command(about = "Barbershop opening hours in the terminal", long_about = None)]
#[command(version)]
pub struct Args {
    /// Config file to load instead of the one in the platform config dir
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn source(self) -> Source {
        match self.config {
            Some(path) => Source::Explicit(path),
            None => Source::Default(paths::config_file()),
        }
    }
}

pub fn load(source: &Source) -> Result<SliderConfig, RuntimeError> {
    let config = match source {
        Source::Explicit(path) => read(path)?,
        Source::Default(Some(path)) if path.exists() => read(path)?,
        Source::Default(_) => {
            debug!("No config file, using defaults");
            defaults()
        }
    };
    config.validate()?;
    Ok(config)
}

/// Settings used when no file is given: arrows and the orientation switch
/// are shown so the page is usable without a mouse wheel.
pub fn defaults() -> SliderConfig {
    SliderConfig::new().gap(2).min_height(7).show_arrows().show_dev_panel()
}

fn read(path: &Path) -> Result<SliderConfig, RuntimeError> {
    let text = fs::read_to_string(path).map_err(|source| RuntimeError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&text).map_err(|source| RuntimeError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}
