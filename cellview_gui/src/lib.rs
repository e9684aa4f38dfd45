// lib.rs - egui frontend for the cellview render/interaction loop
//
// The host application owns the simulation engine and hands it to `run`;
// this crate owns the window, the controls, and the painter.

pub mod app;
pub mod paint;

pub use app::ViewerApp;

use cellview::{Config, Engine, Geometry};
use eframe::egui;
use log::info;

/// Opens the viewer window over `engine` and runs until it is closed.
///
/// ```no_run
/// use cellview::{Config, Engine};
///
/// struct HostEngine {
///     cells: Vec<u8>,
/// }
///
/// unsafe impl Engine for HostEngine {
///     fn width(&self) -> u32 {
///         16
///     }
///     fn height(&self) -> u32 {
///         16
///     }
///     fn tick(&mut self) {
///         // The evolution rule lives in the host, not in the viewer.
///     }
///     fn toggle_cell(&mut self, row: u32, col: u32) {
///         self.cells[(row * 16 + col) as usize] ^= 1;
///     }
///     fn cells(&self) -> *const u8 {
///         self.cells.as_ptr()
///     }
/// }
///
/// fn main() -> Result<(), eframe::Error> {
///     let engine = HostEngine { cells: vec![0; 256] };
///     cellview_gui::run("Automaton", engine, Config::default())
/// }
/// ```
pub fn run<E>(title: &str, engine: E, config: Config) -> Result<(), eframe::Error>
where
    E: Engine + Send + 'static,
{
    let _ = simple_logger::init();
    info!("starting {} v{}", title, env!("CARGO_PKG_VERSION"));

    let geom = Geometry::for_engine(&engine, config.gfx.cell_size);
    let size = [
        (geom.pixel_width() as f32 + 32.0).max(620.0),
        (geom.pixel_height() as f32 + 150.0).max(420.0),
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(size),
        ..Default::default()
    };
    let app_title = title.to_owned();
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Box::new(ViewerApp::new(&app_title, engine, config))),
    )
}
