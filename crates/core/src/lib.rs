//! Core module - the map grid and the math that places it on screen
//!
//! This crate contains the map data structure and the projection/layout
//! algorithms. It has **no dependencies** on terminals, windows, or I/O, making
//! it:
//!
//! - **Deterministic**: the same map and viewport always produce the same matrices
//! - **Testable**: every contract is checked by unit tests
//! - **Portable**: any renderer can draw a map by implementing [`Surface`]
//!
//! # Module Structure
//!
//! - [`map`]: square `size x size` grid of [`CellType`] values, immutable once built
//! - [`projection`]: orthographic projection preserving the content aspect ratio
//! - [`layout`]: model matrix of each cell, centring the map in `[-1, 1]^2`
//! - [`surface`]: the [`Surface`] drawing seam and the per-frame [`draw_map`] routine
//! - [`window`]: the live viewport size shared by input and rendering
//! - [`stage`]: a built-in demo stage
//!
//! # Example
//!
//! ```
//! use battlecity_core::{compute_ortho, Map, Ortho};
//! use battlecity_types::CellType;
//!
//! let map = Map::new(10);
//! assert_eq!(map.row_count(), 10);
//! assert_eq!(map.cell(3, 4), Ok(CellType::Floor));
//! assert!(map.cell(10, 0).is_err());
//!
//! let ortho = Ortho::from_viewport(800, 600).unwrap();
//! assert!(ortho.half_width > 1.0);
//! assert_eq!(ortho.half_height, 1.0);
//! assert!(compute_ortho(800, 0).is_err());
//! ```

pub mod layout;
pub mod map;
pub mod projection;
pub mod stage;
pub mod surface;
pub mod window;

pub use battlecity_types as types;

// Re-export commonly used types for convenience
pub use layout::{cell_center, cell_extent, cell_model, quad_bounds, UNIT_QUAD};
pub use map::{Map, MapError};
pub use projection::{compute_ortho, Ortho, ProjectionError};
pub use stage::demo_stage;
pub use surface::{draw_map, Surface};
pub use types::CellType;
pub use window::WindowState;
