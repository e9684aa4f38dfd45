// config.rs - Viewer configuration

use std::time::Duration;

use crate::surface::Rgb;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub gfx: GfxConfig,
    pub playback: PlaybackConfig,
}

/// Cell size and colors for the rendered grid.
#[derive(Debug, Clone)]
pub struct GfxConfig {
    /// Side length of a cell's fill area, in canvas pixels.
    pub cell_size: u32,
    pub grid_color: Rgb,
    pub dead_color: Rgb,
    pub alive_color: Rgb,
}

impl Default for GfxConfig {
    fn default() -> Self {
        Self {
            cell_size: 5,
            grid_color: Rgb(0xCC, 0xCC, 0xCC),
            dead_color: Rgb(0xFF, 0xFF, 0xFF),
            alive_color: Rgb(0x00, 0x00, 0x00),
        }
    }
}

/// Pacing of the animation loop.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Wall-clock time between frames while playing.
    pub update_interval: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            update_interval: Duration::from_millis(200),
        }
    }
}
