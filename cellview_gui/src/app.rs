// app.rs - eframe application driving the viewer

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use cellview::{
    Bounds, Config, Engine, Geometry, GfxConfig, GridRenderer, GridView, IntervalFrames,
    Scheduler, control, input,
};
use eframe::egui;
use egui::Vec2;
use log::info;
use parking_lot::Mutex;

use crate::paint::{PainterSurface, color32, rgb};

/// The viewer window: control row, grid canvas, statistics.
///
/// The engine is shared with the scheduler's cycle task behind a mutex;
/// the UI thread locks it only to paint, toggle, or read statistics.
pub struct ViewerApp<E: Engine + Send + 'static> {
    title: String,
    engine: Arc<Mutex<E>>,
    geom: Geometry,
    gfx: GfxConfig,
    update_interval: Duration,
    scheduler: Scheduler,
    generations: Arc<AtomicU64>,
    show_text_view: bool,
    // Kept alive for the cycle task; dropped last, after the scheduler
    // has aborted it.
    _runtime: tokio::runtime::Runtime,
}

impl<E: Engine + Send + 'static> ViewerApp<E> {
    pub fn new(title: &str, engine: E, config: Config) -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("failed to start tokio runtime");
        let geom = Geometry::for_engine(&engine, config.gfx.cell_size);
        info!(
            "viewing a {}x{} grid ({}x{} px canvas)",
            geom.width(),
            geom.height(),
            geom.pixel_width(),
            geom.pixel_height()
        );
        ViewerApp {
            title: title.to_owned(),
            engine: Arc::new(Mutex::new(engine)),
            geom,
            gfx: config.gfx,
            update_interval: config.playback.update_interval,
            scheduler: Scheduler::new(runtime.handle().clone()),
            generations: Arc::new(AtomicU64::new(0)),
            show_text_view: false,
            _runtime: runtime,
        }
    }

    /// Starts the animation loop; each completed cycle bumps the
    /// generation counter and asks egui for a repaint.
    fn play(&mut self, ctx: &egui::Context) {
        let generations = Arc::clone(&self.generations);
        let ctx = ctx.clone();
        self.scheduler.play(
            Arc::clone(&self.engine),
            IntervalFrames::new(self.update_interval),
            move || {
                generations.fetch_add(1, Ordering::Relaxed);
                ctx.request_repaint();
            },
        );
    }
}

impl<E: Engine + Send + 'static> eframe::App for ViewerApp<E> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.title.as_str());

            // Controls
            ui.horizontal(|ui| {
                let paused = self.scheduler.is_paused();
                if ui.button(control::action_label(paused)).clicked() {
                    if paused {
                        self.play(ctx);
                    } else {
                        self.scheduler.pause();
                    }
                }

                ui.separator();

                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                    if !self.scheduler.is_paused() {
                        // Restart the loop at the new pace.
                        self.scheduler.pause();
                        self.play(ctx);
                    }
                }

                ui.separator();

                ui.label("Live:");
                let mut live_color = color32(self.gfx.alive_color);
                if ui.color_edit_button_srgba(&mut live_color).changed() {
                    self.gfx.alive_color = rgb(live_color);
                }
                ui.label("Dead:");
                let mut dead_color = color32(self.gfx.dead_color);
                if ui.color_edit_button_srgba(&mut dead_color).changed() {
                    self.gfx.dead_color = rgb(dead_color);
                }

                ui.separator();
                ui.checkbox(&mut self.show_text_view, "Text view");
            });

            ui.separator();
            ui.label("Click cells to toggle them alive/dead, running or paused.");
            ui.separator();

            let renderer = GridRenderer::new(self.geom, self.gfx.clone());
            let pixel_size = Vec2::new(
                self.geom.pixel_width() as f32,
                self.geom.pixel_height() as f32,
            );

            let live = egui::ScrollArea::both()
                .show(ui, |ui| {
                    let (response, painter) =
                        ui.allocate_painter(pixel_size, egui::Sense::click());
                    let mut surface = PainterSurface::new(&painter, response.rect, pixel_size);

                    let mut engine = self.engine.lock();
                    let clicked = if response.clicked() {
                        response.interact_pointer_pos()
                    } else {
                        None
                    };
                    if let Some(pos) = clicked {
                        let bounds = Bounds {
                            left: response.rect.min.x,
                            top: response.rect.min.y,
                            width: response.rect.width(),
                            height: response.rect.height(),
                        };
                        // Toggles the cell under the pointer, then repaints.
                        input::handle_click(
                            &mut *engine,
                            &renderer,
                            &mut surface,
                            bounds,
                            pos.x,
                            pos.y,
                        );
                    } else {
                        renderer.draw_grid(&mut surface);
                        renderer.draw_cells(&mut surface, &GridView::of(&*engine));
                    }

                    if self.show_text_view {
                        ui.monospace(engine.render());
                    }

                    GridView::of(&*engine).live_cells()
                })
                .inner;

            ui.separator();

            // Statistics
            ui.horizontal(|ui| {
                ui.label(format!(
                    "Generation: {}",
                    self.generations.load(Ordering::Relaxed)
                ));
                ui.label(format!("Live cells: {}", live));
            });
        });
    }
}
