//! Live window (terminal) size shared between the input layer and the render loop.

use crate::types::{FALLBACK_COLS, FALLBACK_ROWS};

/// Current viewport size in terminal cells.
///
/// Owned by the render loop, updated in place by resize events and read once
/// per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    width: u16,
    height: u16,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: FALLBACK_COLS,
            height: FALLBACK_ROWS,
        }
    }
}

impl WindowState {
    pub fn new(width: u16, height: u16) -> Self {
        let mut state = Self::default();
        state.resize(width, height);
        state
    }

    /// Apply a resize. A zero height is clamped to 1 so the projection stays valid.
    ///
    /// Returns true if the size actually changed.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        let next = Self {
            width,
            height: height.max(1),
        };
        let changed = next != *self;
        *self = next;
        changed
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}
