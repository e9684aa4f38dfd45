// surface.rs - Drawing-target abstraction

/// 8-bit RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One straight line segment in canvas space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Segment {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Segment { x0, y0, x1, y1 }
    }
}

/// A 2D drawing target. Implementations translate canvas-space commands
/// into whatever the host can display.
pub trait Surface {
    /// Strokes a batch of segments as a single path. Callers hand over the
    /// whole batch at once so implementations can avoid per-line draw
    /// calls.
    fn stroke_segments(&mut self, segments: &[Segment], color: Rgb);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);
}

/// Surface used when no drawing target is attached; every command is
/// discarded.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn stroke_segments(&mut self, _segments: &[Segment], _color: Rgb) {}

    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: Rgb) {}
}
