//! Logging setup.
//!
//! The terminal is in raw mode while the map is on screen, so log lines on
//! stderr would tear the frame. Logs go to `BATTLECITY_LOG_PATH` when it is
//! set; otherwise they go to stderr only when `RUST_LOG` asks for them.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::Config;

/// Install the global logger. Safe to call more than once; later calls are no-ops.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path))?;
            let mut b = Builder::from_env(Env::default().default_filter_or("info"));
            b.target(Target::Pipe(Box::new(file)));
            b
        }
        None => Builder::from_env(Env::default().default_filter_or("off")),
    };

    if let Err(err) = builder.format_timestamp_millis().try_init() {
        log::debug!("logger already installed: {}", err);
    }
    Ok(())
}
