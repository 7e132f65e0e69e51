//! Cell placement in world space.
//!
//! Each cell is drawn as the unit quad `[-0.5, 0.5]^2`, scaled to `2 / rows`
//! and translated by `(col - (cols-1)/2, row - (rows-1)/2) * 2 / rows`. A map
//! therefore always spans `[-1, 1]^2`, centred on the origin, with row 0 at
//! the bottom (world `y` points up).

use glam::{Mat4, Vec2, Vec3};

/// Corners of the unit quad every cell is drawn from, counter-clockwise.
pub const UNIT_QUAD: [Vec2; 4] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, 0.5),
];

/// World-space edge length of one cell in a map with `rows` rows.
#[inline]
pub fn cell_extent(rows: usize) -> f32 {
    2.0 / rows as f32
}

/// World-space centre of cell `(row, col)`.
pub fn cell_center(rows: usize, cols: usize, row: usize, col: usize) -> Vec2 {
    let offset = Vec2::new(
        col as f32 - (cols as f32 - 1.0) / 2.0,
        row as f32 - (rows as f32 - 1.0) / 2.0,
    );
    offset * cell_extent(rows)
}

/// Model matrix placing the unit quad at cell `(row, col)`.
pub fn cell_model(rows: usize, cols: usize, row: usize, col: usize) -> Mat4 {
    let center = cell_center(rows, cols, row, col);
    let extent = cell_extent(rows);
    Mat4::from_translation(center.extend(0.0)) * Mat4::from_scale(Vec3::new(extent, extent, 1.0))
}

/// Axis-aligned `(min, max)` corners of a quad after `transform`.
///
/// Only valid for transforms without rotation, which is all that orthographic
/// projection and [`cell_model`] produce.
pub fn quad_bounds(transform: Mat4) -> (Vec2, Vec2) {
    let a = transform.transform_point3(UNIT_QUAD[0].extend(0.0)).truncate();
    let b = transform.transform_point3(UNIT_QUAD[2].extend(0.0)).truncate();
    (a.min(b), a.max(b))
}
