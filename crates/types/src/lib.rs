//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! from the map/projection core, the terminal renderer and the input layer.
//!
//! # Cell Types
//!
//! Every map cell holds one terrain classification:
//!
//! | Variant | Id | Description |
//! |---------|----|-------------|
//! | `Floor` | 0 | Open ground, the default for new maps |
//! | `Clay` | 1 | Soft, destructible block |
//! | `Wall` | 2 | Brick wall |
//! | `Rock` | 3 | Indestructible block |
//! | `Water` | 4 | Impassable for tanks, passable for shells |
//! | `Custom(n)` | n >= 1000 | Extension range for user-defined terrain |
//!
//! Ids 5..=999 are reserved and never map to a cell type.
//!
//! # Frame Timing
//!
//! - `FRAME_MS`: 16ms - target frame interval (~60 FPS)
//! - `MAX_EVENTS_PER_FRAME`: upper bound of terminal events handled per frame
//!
//! # Examples
//!
//! ```
//! use battlecity_types::{CellType, AppAction, CUSTOM_OFFSET};
//!
//! // Named cell types round-trip through their ids
//! assert_eq!(CellType::from_id(2), Some(CellType::Wall));
//! assert_eq!(CellType::Wall.id(), 2);
//!
//! // Custom terrain starts at the reserved offset
//! let lava = CellType::custom(CUSTOM_OFFSET + 7).unwrap();
//! assert_eq!(lava.id(), 1007);
//! assert_eq!(CellType::from_id(42), None);
//! ```

/// First id of the `Custom` extension range.
pub const CUSTOM_OFFSET: u32 = 1000;

/// Default map edge length (13x13, the classic BattleCity stage size).
pub const DEFAULT_MAP_SIZE: usize = 13;

/// Largest accepted map edge length.
pub const MAX_MAP_SIZE: usize = 256;

/// Target frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Terminal glyph height over width. Most monospace fonts are about 1:2.
pub const DEFAULT_GLYPH_RATIO: u16 = 2;

/// Fallback terminal size when the real size can't be queried.
pub const FALLBACK_COLS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 24;

/// Maximum number of terminal events drained in a single frame.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

/// Terrain classification of one map cell.
///
/// The named variants form a closed set. `Custom` carries an id from the
/// extension range starting at [`CUSTOM_OFFSET`]; build it through
/// [`CellType::custom`] so the range is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum CellType {
    #[default]
    Floor,
    Clay,
    Wall,
    Rock,
    Water,
    Custom(u32),
}

impl CellType {
    /// All named (non-custom) cell types in id order.
    pub const NAMED: [CellType; 5] = [
        CellType::Floor,
        CellType::Clay,
        CellType::Wall,
        CellType::Rock,
        CellType::Water,
    ];

    /// Build a custom cell type. Returns `None` for ids below [`CUSTOM_OFFSET`].
    ///
    /// # Examples
    ///
    /// ```
    /// use battlecity_types::CellType;
    ///
    /// assert_eq!(CellType::custom(1000), Some(CellType::Custom(1000)));
    /// assert_eq!(CellType::custom(999), None);
    /// ```
    pub fn custom(id: u32) -> Option<Self> {
        (id >= CUSTOM_OFFSET).then_some(CellType::Custom(id))
    }

    /// Map a numeric id to a cell type.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(CellType::Floor),
            1 => Some(CellType::Clay),
            2 => Some(CellType::Wall),
            3 => Some(CellType::Rock),
            4 => Some(CellType::Water),
            n => CellType::custom(n),
        }
    }

    /// Numeric id of this cell type.
    pub fn id(&self) -> u32 {
        match self {
            CellType::Floor => 0,
            CellType::Clay => 1,
            CellType::Wall => 2,
            CellType::Rock => 3,
            CellType::Water => 4,
            CellType::Custom(n) => *n,
        }
    }
}

/// Application-level actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Leave the render loop and restore the terminal
    Quit,
    /// The terminal was resized; the window state already holds the new size
    Resized,
}

impl AppAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppAction::Quit => "quit",
            AppAction::Resized => "resized",
        }
    }
}
