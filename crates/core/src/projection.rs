//! Aspect-ratio preserving orthographic projection.
//!
//! The projection keeps the unit square `[-1, 1]^2` fully visible and
//! undistorted for any viewport shape: wide viewports get extra room on the
//! left and right, tall viewports above and below.

use glam::Mat4;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("viewport height must be greater than zero (width {width})")]
    ZeroHeight { width: u32 },
    #[error("viewport width must be greater than zero (height {height})")]
    ZeroWidth { height: u32 },
}

/// Half-extents of the visible world region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ortho {
    pub half_width: f32,
    pub half_height: f32,
}

impl Ortho {
    /// Compute half-extents for a `width x height` viewport.
    ///
    /// With `ratio = width / height`: a wide viewport (`ratio > 1`) yields
    /// `(ratio, 1)`, anything else yields `(1, 1 / ratio)`.
    pub fn from_viewport(width: u32, height: u32) -> Result<Self, ProjectionError> {
        if height == 0 {
            return Err(ProjectionError::ZeroHeight { width });
        }
        if width == 0 {
            return Err(ProjectionError::ZeroWidth { height });
        }

        let ratio = width as f32 / height as f32;
        if ratio > 1.0 {
            Ok(Self {
                half_width: ratio,
                half_height: 1.0,
            })
        } else {
            Ok(Self {
                half_width: 1.0,
                half_height: 1.0 / ratio,
            })
        }
    }

    /// `ortho(-hw, hw, -hh, hh)` with the OpenGL depth range [-1, 1].
    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            -self.half_width,
            self.half_width,
            -self.half_height,
            self.half_height,
            -1.0,
            1.0,
        )
    }
}

/// Orthographic matrix for a `width x height` viewport.
pub fn compute_ortho(width: u32, height: u32) -> Result<Mat4, ProjectionError> {
    Ortho::from_viewport(width, height).map(|o| o.matrix())
}
