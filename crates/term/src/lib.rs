//! Terminal "map renderer" module.
//!
//! This is the renderer surface for terminal play. It renders the map into a
//! simple framebuffer that is then flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Treat the terminal like a tiny GPU: quads in, projected and rasterized
//! - Keep square cells square by accounting for the glyph aspect ratio

pub mod fb;
pub mod map_view;
pub mod renderer;

pub use battlecity_core as core;
pub use battlecity_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use map_view::{cell_appearance, ndc_to_screen, MapView, Viewport, CLEAR_COLOR};
pub use renderer::{encode_diff_into, encode_full_into, ChangedRuns, Redraw, Run, TerminalRenderer};
