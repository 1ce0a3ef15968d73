mod buffer;
mod content;
mod error;
mod layout;
mod paint;
mod paths;
mod runtime;
mod settings;

use std::fs::{self, File};

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use settings::Args;

/// Log to a file; stdout belongs to the page.
fn init_logging() {
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
        }
        Err(e) => eprintln!("Cannot open log file {}: {}", path.display(), e),
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging();

    let result = match settings::load(&args.source()) {
        Ok(config) => runtime::run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
