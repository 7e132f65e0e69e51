//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::AppAction`]s and applies
//! resize events to the shared [`crate::core::WindowState`].

pub mod handler;
pub mod map;

pub use battlecity_core as core;
pub use battlecity_types as types;

pub use handler::{handle_event, ActionBatch, EventHandler};
pub use map::{handle_key_event, should_quit};
