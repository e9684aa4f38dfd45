// input.rs - Pointer clicks to cell toggles

use log::debug;

use crate::engine::Engine;
use crate::geom::Geometry;
use crate::render::GridRenderer;
use crate::surface::Surface;
use crate::view::GridView;

/// Client-space bounding rect of the drawing surface, as laid out by the
/// host. The extents may differ from the surface's own pixel size when the
/// host scales the element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Maps a client-space click to the cell under it: rescale from the layout
/// extent to surface pixels, then floor into grid coordinates. Clicks on
/// or past the final grid line land on the last row/column; clicks before
/// the first land on the first.
pub fn map_click(geom: &Geometry, bounds: Bounds, client_x: f32, client_y: f32) -> (u32, u32) {
    let scale_x = geom.pixel_width() as f32 / bounds.width;
    let scale_y = geom.pixel_height() as f32 / bounds.height;
    let canvas_x = (client_x - bounds.left) * scale_x;
    let canvas_y = (client_y - bounds.top) * scale_y;
    geom.cell_at(canvas_x, canvas_y)
}

/// Applies one click: toggle the cell under the pointer, then repaint grid
/// and cells so the edit is visible immediately, whether or not the
/// animation loop is running.
pub fn handle_click<E, S>(
    engine: &mut E,
    renderer: &GridRenderer,
    surface: &mut S,
    bounds: Bounds,
    client_x: f32,
    client_y: f32,
) where
    E: Engine,
    S: Surface,
{
    let (row, col) = map_click(renderer.geometry(), bounds, client_x, client_y);
    debug!("toggling cell ({}, {})", row, col);
    engine.toggle_cell(row, col);
    renderer.draw_grid(surface);
    renderer.draw_cells(surface, &GridView::of(engine));
}

#[cfg(test)]
mod tests {
    use crate::config::GfxConfig;
    use crate::testutil::{RecordingSurface, ScriptedEngine};
    use crate::view::Cell;

    use super::*;

    fn geom() -> Geometry {
        Geometry::new(8, 8, 5) // 49x49 pixel canvas
    }

    fn unscaled_bounds() -> Bounds {
        Bounds { left: 0.0, top: 0.0, width: 49.0, height: 49.0 }
    }

    #[test]
    fn maps_through_offset_and_scale() {
        // Laid out at twice the pixel size, offset into the page.
        let bounds = Bounds { left: 100.0, top: 50.0, width: 98.0, height: 98.0 };
        assert_eq!(map_click(&geom(), bounds, 100.0, 50.0), (0, 0));
        assert_eq!(map_click(&geom(), bounds, 197.0, 147.0), (7, 7));
        // 13 client px past the left edge = 6.5 canvas px = column 1.
        assert_eq!(map_click(&geom(), bounds, 113.0, 50.0), (0, 1));
    }

    #[test]
    fn clicks_outside_the_surface_clamp_to_the_edge() {
        let bounds = Bounds { left: 10.0, top: 10.0, width: 49.0, height: 49.0 };
        assert_eq!(map_click(&geom(), bounds, 0.0, 0.0), (0, 0));
        assert_eq!(map_click(&geom(), bounds, 500.0, 500.0), (7, 7));
    }

    #[test]
    fn click_toggles_and_repaints() {
        let mut engine = ScriptedEngine::blank(8, 8);
        let gfx = GfxConfig::default();
        let renderer = GridRenderer::new(geom(), gfx.clone());
        let mut surface = RecordingSurface::default();

        // (20, 8) is 3 columns across, 1 row down.
        handle_click(&mut engine, &renderer, &mut surface, unscaled_bounds(), 20.0, 8.0);

        assert_eq!(GridView::of(&engine).cell(1, 3), Cell::Alive);
        assert_eq!(surface.strokes.len(), 1, "grid repaint");
        assert_eq!(surface.rects.len(), 64, "cell repaint");
        let alive = surface
            .rects
            .iter()
            .filter(|(_, _, _, _, color)| *color == gfx.alive_color)
            .count();
        assert_eq!(alive, 1);
    }

    #[test]
    fn toggling_twice_restores_the_original_state() {
        let mut engine = ScriptedEngine::blank(8, 8);
        let renderer = GridRenderer::new(geom(), GfxConfig::default());
        let mut surface = RecordingSurface::default();

        handle_click(&mut engine, &renderer, &mut surface, unscaled_bounds(), 20.0, 8.0);
        handle_click(&mut engine, &renderer, &mut surface, unscaled_bounds(), 20.0, 8.0);

        assert_eq!(GridView::of(&engine).cell(1, 3), Cell::Dead);
        assert_eq!(GridView::of(&engine).live_cells(), 0);
    }
}
