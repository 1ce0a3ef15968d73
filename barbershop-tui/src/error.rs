use std::io;
use std::path::PathBuf;

use slider::SliderError;
use thiserror::Error;

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Slider(#[from] SliderError),
}
