//! Drawing seam between the map core and a concrete renderer.
//!
//! The core only decides *what* goes where: the projection for the frame and
//! one model matrix per cell. A [`Surface`] decides how that becomes pixels.

use glam::Mat4;

use crate::layout::cell_model;
use crate::map::Map;
use crate::projection::{Ortho, ProjectionError};
use crate::types::CellType;

/// A target that can draw map cells.
pub trait Surface {
    /// Start a frame with the projection for the current viewport.
    fn begin_frame(&mut self, projection: Mat4);

    /// Draw one cell: the unit quad transformed by `model`.
    fn draw_cell(&mut self, model: Mat4, cell: CellType);

    fn end_frame(&mut self) {}
}

/// Draw a whole map onto `surface` for a `width x height` viewport.
///
/// The projection is computed once for the frame. Cells are drawn in
/// row-major order.
pub fn draw_map<S: Surface + ?Sized>(
    map: &Map,
    width: u32,
    height: u32,
    surface: &mut S,
) -> Result<Ortho, ProjectionError> {
    let ortho = Ortho::from_viewport(width, height)?;
    surface.begin_frame(ortho.matrix());

    let (rows, cols) = (map.row_count(), map.col_count());
    for (row, col, cell) in map.cells() {
        surface.draw_cell(cell_model(rows, cols, row, col), cell);
    }

    surface.end_frame();
    Ok(ortho)
}
