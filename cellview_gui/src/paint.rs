// paint.rs - egui Painter as a drawing surface

use cellview::{Rgb, Segment, Surface};
use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};

pub fn color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

pub fn rgb(color: Color32) -> Rgb {
    Rgb(color.r(), color.g(), color.b())
}

/// Canvas-space drawing commands mapped onto an egui painter region.
///
/// `rect` is where the canvas was laid out; when its extent differs from
/// the canvas pixel size, commands are scaled to fit (the inverse of the
/// click transform in `cellview::input`).
pub struct PainterSurface<'p> {
    painter: &'p egui::Painter,
    origin: Pos2,
    scale: Vec2,
}

impl<'p> PainterSurface<'p> {
    pub fn new(painter: &'p egui::Painter, rect: Rect, pixel_size: Vec2) -> Self {
        PainterSurface {
            painter,
            origin: rect.min,
            scale: Vec2::new(rect.width() / pixel_size.x, rect.height() / pixel_size.y),
        }
    }

    fn project(&self, x: f32, y: f32) -> Pos2 {
        Pos2::new(self.origin.x + x * self.scale.x, self.origin.y + y * self.scale.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn stroke_segments(&mut self, segments: &[Segment], color: Rgb) {
        let stroke = Stroke::new(1.0, color32(color));
        let shapes: Vec<Shape> = segments
            .iter()
            .map(|s| {
                Shape::line_segment([self.project(s.x0, s.y0), self.project(s.x1, s.y1)], stroke)
            })
            .collect();
        // One extend call per batch keeps the whole grid a single
        // shape-list append.
        self.painter.extend(shapes);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let rect = Rect::from_min_size(
            self.project(x, y),
            Vec2::new(w * self.scale.x, h * self.scale.y),
        );
        self.painter.rect_filled(rect, 0.0, color32(color));
    }
}
