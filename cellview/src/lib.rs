// lib.rs - Render/interaction loop over an externally-owned cell engine
//
// The engine (evolution rule, cell storage, stepping) lives in the host
// application. This crate only reads the engine's byte buffer, draws it,
// paces its stepping, and forwards pointer edits back to it.

pub mod config;
pub mod control;
pub mod engine;
pub mod geom;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod surface;
pub mod view;

pub use config::{Config, GfxConfig, PlaybackConfig};
pub use engine::Engine;
pub use geom::Geometry;
pub use input::Bounds;
pub use render::GridRenderer;
pub use scheduler::{FrameSource, IntervalFrames, Scheduler};
pub use surface::{NullSurface, Rgb, Segment, Surface};
pub use view::{Cell, GridView};

#[cfg(test)]
pub(crate) mod testutil;
