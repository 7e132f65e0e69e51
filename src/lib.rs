//! BattleCity map renderer (workspace facade crate).
//!
//! This package exposes `battlecity::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`. Application-level
//! glue (configuration and logging) lives here.

pub mod config;
pub mod logging;

pub use battlecity_core as core;
pub use battlecity_input as input;
pub use battlecity_term as term;
pub use battlecity_types as types;

pub use config::Config;

/// Build the map the app starts with.
pub fn startup_map(config: &Config) -> Result<core::Map, core::MapError> {
    if config.plain_map {
        core::Map::try_new(config.map_size)
    } else {
        core::Map::check_size(config.map_size)?;
        Ok(core::demo_stage(config.map_size))
    }
}
