//! MapView: draws a `core::Map` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It is the terminal [`Surface`]: the core
//! hands it a projection and one model matrix per cell, and it rasterizes each
//! transformed quad into character cells.

use glam::{Mat4, Vec2};

use crate::core::{draw_map, quad_bounds, CellType, Map, Ortho, Surface, WindowState};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::DEFAULT_GLYPH_RATIO;

/// Background behind the map; (0.2, 0.3, 0.3) as a unit float color.
pub const CLEAR_COLOR: Rgb = Rgb::new(51, 77, 77);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Size in square "pixels": each terminal row is `glyph_ratio` pixels tall.
    pub fn pixel_size(&self, glyph_ratio: u16) -> (u32, u32) {
        (
            self.width as u32,
            self.height as u32 * glyph_ratio.max(1) as u32,
        )
    }
}

impl From<WindowState> for Viewport {
    fn from(w: WindowState) -> Self {
        Self::new(w.width(), w.height())
    }
}

/// Glyph and colors for a cell type.
pub fn cell_appearance(cell: CellType) -> Cell {
    let (ch, fg, bg) = match cell {
        CellType::Floor => ('·', Rgb::new(70, 70, 70), Rgb::new(16, 16, 16)),
        CellType::Clay => ('▒', Rgb::new(210, 140, 80), Rgb::new(110, 60, 30)),
        CellType::Wall => ('▓', Rgb::new(200, 80, 60), Rgb::new(90, 30, 20)),
        CellType::Rock => ('█', Rgb::new(170, 170, 170), Rgb::new(90, 90, 90)),
        CellType::Water => ('≈', Rgb::new(130, 190, 255), Rgb::new(20, 60, 160)),
        CellType::Custom(id) => ('?', Rgb::new(255, 255, 255), custom_color(id)),
    };
    CellStyle::new(fg, bg).into_cell(ch)
}

/// Stable, reasonably distinct background for a custom id.
fn custom_color(id: u32) -> Rgb {
    let h = id.wrapping_mul(2_654_435_761);
    Rgb::new(
        64 + (h >> 24) as u8 % 160,
        64 + (h >> 16) as u8 % 160,
        64 + (h >> 8) as u8 % 160,
    )
}

/// Map a normalized device coordinate to framebuffer space (y down).
#[inline]
pub fn ndc_to_screen(ndc: Vec2, width: u16, height: u16) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * width as f32,
        (1.0 - ndc.y) * 0.5 * height as f32,
    )
}

/// First terminal cell whose centre lies at or after `edge`.
#[inline]
fn first_covered(edge: f32) -> i32 {
    (edge - 0.5).ceil() as i32
}

/// Rasterizes projected cell quads into a framebuffer.
struct Rasterizer<'a> {
    fb: &'a mut FrameBuffer,
    projection: Mat4,
}

impl Surface for Rasterizer<'_> {
    fn begin_frame(&mut self, projection: Mat4) {
        self.projection = projection;
        self.fb.clear(CellStyle::new(CLEAR_COLOR, CLEAR_COLOR).into_cell(' '));
    }

    fn draw_cell(&mut self, model: Mat4, cell: CellType) {
        let (min, max) = quad_bounds(self.projection * model);
        let (w, h) = (self.fb.width(), self.fb.height());
        // NDC y grows upwards, screen y downwards: max.y becomes the top edge.
        let top_left = ndc_to_screen(Vec2::new(min.x, max.y), w, h);
        let bottom_right = ndc_to_screen(Vec2::new(max.x, min.y), w, h);

        // A terminal cell is covered when its centre is inside [min, max).
        self.fb.fill_rect(
            first_covered(top_left.x),
            first_covered(top_left.y),
            first_covered(bottom_right.x),
            first_covered(bottom_right.y),
            cell_appearance(cell),
        );
    }
}

/// A lightweight terminal renderer for the map.
pub struct MapView {
    /// Terminal glyph height over width.
    glyph_ratio: u16,
    show_hud: bool,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            glyph_ratio: DEFAULT_GLYPH_RATIO,
            show_hud: false,
        }
    }
}

impl MapView {
    pub fn new(glyph_ratio: u16) -> Self {
        Self {
            glyph_ratio: glyph_ratio.max(1),
            ..Self::default()
        }
    }

    pub fn with_hud(mut self, show_hud: bool) -> Self {
        self.show_hud = show_hud;
        self
    }

    pub fn glyph_ratio(&self) -> u16 {
        self.glyph_ratio
    }

    /// Render the map into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport. Returns the frame's projection, or `None` for an empty
    /// viewport (nothing is drawn).
    pub fn render_into(&self, map: &Map, viewport: Viewport, fb: &mut FrameBuffer) -> Option<Ortho> {
        fb.resize(viewport.width, viewport.height);

        let (pw, ph) = viewport.pixel_size(self.glyph_ratio);
        let mut raster = Rasterizer {
            fb: &mut *fb,
            projection: Mat4::IDENTITY,
        };
        let ortho = match draw_map(map, pw, ph, &mut raster) {
            Ok(ortho) => ortho,
            Err(err) => {
                log::trace!("skipping frame: {}", err);
                return None;
            }
        };

        if self.show_hud {
            self.draw_hud(map, viewport, fb);
        }
        Some(ortho)
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, map: &Map, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(map, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, map: &Map, viewport: Viewport, fb: &mut FrameBuffer) {
        let style = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: CLEAR_COLOR,
            bold: true,
        };
        let text = format!(
            " BATTLECITY {}x{}  {}x{}  [Esc] quit ",
            map.row_count(),
            map.col_count(),
            viewport.width,
            viewport.height
        );
        fb.put_str(0, 0, &text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_scales_rows() {
        assert_eq!(Viewport::new(80, 24).pixel_size(2), (80, 48));
        assert_eq!(Viewport::new(80, 24).pixel_size(0), (80, 24));
    }

    #[test]
    fn ndc_corners_map_to_screen_corners() {
        let tl = ndc_to_screen(Vec2::new(-1.0, 1.0), 40, 20);
        let br = ndc_to_screen(Vec2::new(1.0, -1.0), 40, 20);
        assert_eq!(tl, Vec2::new(0.0, 0.0));
        assert_eq!(br, Vec2::new(40.0, 20.0));
    }

    #[test]
    fn coverage_uses_cell_centres() {
        assert_eq!(first_covered(0.0), 0);
        assert_eq!(first_covered(0.5), 0);
        assert_eq!(first_covered(0.51), 1);
        assert_eq!(first_covered(2.0), 2);
        assert_eq!(first_covered(-3.0), -3);
    }

    #[test]
    fn every_cell_type_has_a_distinct_look() {
        let mut seen = Vec::new();
        for cell in CellType::NAMED {
            let look = cell_appearance(cell);
            assert!(!seen.contains(&look), "{:?} reuses a look", cell);
            seen.push(look);
        }
        assert_eq!(cell_appearance(CellType::Custom(1001)).ch, '?');
        assert_eq!(custom_color(1001), custom_color(1001));
    }

    #[test]
    fn empty_viewport_skips_frame() {
        let view = MapView::default();
        let mut fb = FrameBuffer::new(0, 0);
        assert!(view.render_into(&Map::new(3), Viewport::new(0, 0), &mut fb).is_none());
        assert!(view.render_into(&Map::new(3), Viewport::new(10, 0), &mut fb).is_none());
    }

    #[test]
    fn hud_shows_map_and_viewport_size() {
        let view = MapView::default().with_hud(true);
        let fb = view.render(&Map::new(13), Viewport::new(60, 20));
        let top = fb.rows().next().unwrap();
        assert!(top.contains("BATTLECITY 13x13"));
        assert!(top.contains("60x20"));
    }
}
