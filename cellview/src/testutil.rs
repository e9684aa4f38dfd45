// testutil.rs - Scripted engine and recording surface shared by unit tests

use crate::engine::Engine;
use crate::surface::{Rgb, Segment, Surface};

/// In-memory engine stand-in. `tick` only counts generations; unit tests
/// script the buffer through `toggle_cell`.
pub(crate) struct ScriptedEngine {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    pub ticks: u32,
}

impl ScriptedEngine {
    pub fn blank(width: u32, height: u32) -> Self {
        ScriptedEngine {
            width,
            height,
            cells: vec![0; (width * height) as usize],
            ticks: 0,
        }
    }
}

unsafe impl Engine for ScriptedEngine {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tick(&mut self) {
        self.ticks += 1;
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        let idx = (row * self.width + col) as usize;
        self.cells[idx] = if self.cells[idx] == 0 { 1 } else { 0 };
    }

    fn cells(&self) -> *const u8 {
        self.cells.as_ptr()
    }
}

/// Surface that records every draw call for assertions.
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub strokes: Vec<(Vec<Segment>, Rgb)>,
    pub rects: Vec<(f32, f32, f32, f32, Rgb)>,
}

impl Surface for RecordingSurface {
    fn stroke_segments(&mut self, segments: &[Segment], color: Rgb) {
        self.strokes.push((segments.to_vec(), color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.rects.push((x, y, w, h, color));
    }
}
