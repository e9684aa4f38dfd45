// render.rs - Grid-line and cell painting

use crate::config::GfxConfig;
use crate::geom::Geometry;
use crate::surface::{Segment, Surface};
use crate::view::GridView;

/// Draws grid lines and cell fills for a fixed geometry.
///
/// Both operations repaint the full canvas from the current view state;
/// there is no dirty-rect tracking. They are pure functions of geometry
/// plus buffer contents and have no effect beyond the draw calls they
/// emit.
pub struct GridRenderer {
    geom: Geometry,
    gfx: GfxConfig,
}

impl GridRenderer {
    pub fn new(geom: Geometry, gfx: GfxConfig) -> Self {
        GridRenderer { geom, gfx }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geom
    }

    /// Strokes `width + 1` vertical and `height + 1` horizontal lines,
    /// batched into a single path.
    pub fn draw_grid<S: Surface>(&self, surface: &mut S) {
        let pitch = self.geom.pitch() as f32;
        let px_w = self.geom.pixel_width() as f32;
        let px_h = self.geom.pixel_height() as f32;

        let mut segments =
            Vec::with_capacity((self.geom.width() + self.geom.height() + 2) as usize);
        for i in 0..=self.geom.width() {
            let x = i as f32 * pitch + 1.0;
            segments.push(Segment::new(x, 0.0, x, px_h));
        }
        for j in 0..=self.geom.height() {
            let y = j as f32 * pitch + 1.0;
            segments.push(Segment::new(0.0, y, px_w, y));
        }
        surface.stroke_segments(&segments, self.gfx.grid_color);
    }

    /// Fills every cell, row-major, with the alive or dead color.
    pub fn draw_cells<S: Surface>(&self, surface: &mut S, view: &GridView<'_>) {
        debug_assert_eq!(
            (view.width(), view.height()),
            (self.geom.width(), self.geom.height()),
            "view and renderer disagree on grid dimensions",
        );
        let size = self.geom.cell_size() as f32;
        for row in 0..self.geom.height() {
            for col in 0..self.geom.width() {
                let color = if view.cell(row, col).is_alive() {
                    self.gfx.alive_color
                } else {
                    self.gfx.dead_color
                };
                let (x, y) = self.geom.cell_origin(row, col);
                surface.fill_rect(x, y, size, size, color);
            }
        }
    }
}
