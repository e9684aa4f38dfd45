// scheduler.rs - Cooperative play/pause loop over the engine

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::engine::Engine;

/// Source of per-frame wake-ups for the cycle task.
///
/// `next_frame` completes when the host signals the next frame. The await
/// on it is the cycle task's only suspension point, which is where `pause`
/// cancels the loop.
pub trait FrameSource: Send + 'static {
    fn next_frame(&mut self) -> impl Future<Output = ()> + Send;
}

/// Frame signals paced by a wall-clock interval.
///
/// Frames that would have fired while a cycle was still running are
/// skipped, not replayed in a burst.
pub struct IntervalFrames {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalFrames {
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "frame period must be positive");
        IntervalFrames { period, interval: None }
    }
}

impl FrameSource for IntervalFrames {
    fn next_frame(&mut self) -> impl Future<Output = ()> + Send {
        async move {
            // Built lazily so construction works outside a runtime; the
            // first frame fires one full period after play, not
            // immediately.
            let interval = self.interval.get_or_insert_with(|| {
                let mut interval =
                    tokio::time::interval_at(Instant::now() + self.period, self.period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                interval
            });
            interval.tick().await;
        }
    }
}

/// Scheduler-state slot: paused iff no cycle task is scheduled.
enum PlayState {
    Paused,
    Running(JoinHandle<()>),
}

/// Drives the engine one generation per frame while running.
///
/// `play` spawns the cycle task and stores its join handle; the handle
/// doubles as the cancellation token for `pause`. Both transitions are
/// idempotent, and at most one cycle task exists at a time.
pub struct Scheduler {
    runtime: Handle,
    state: PlayState,
}

impl Scheduler {
    /// A paused scheduler that will spawn its cycle task on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Scheduler {
            runtime,
            state: PlayState::Paused,
        }
    }

    /// True iff no cycle is scheduled.
    pub fn is_paused(&self) -> bool {
        matches!(self.state, PlayState::Paused)
    }

    /// Starts the loop: wait for a frame, step the engine once, request a
    /// full repaint, repeat until cancelled. No-op when already running.
    ///
    /// The engine lock is held only across `tick`, so the host can read
    /// the buffer for painting between cycles.
    pub fn play<E, F, R>(&mut self, engine: Arc<Mutex<E>>, mut frames: F, mut redraw: R)
    where
        E: Engine + Send + 'static,
        F: FrameSource,
        R: FnMut() + Send + 'static,
    {
        if !self.is_paused() {
            return;
        }
        debug!("playback started");
        let handle = self.runtime.spawn(async move {
            loop {
                frames.next_frame().await;
                engine.lock().tick();
                redraw();
            }
        });
        self.state = PlayState::Running(handle);
    }

    /// Cancels the pending cycle and returns to paused. No-op when already
    /// paused; aborting a task that has already stopped is itself a no-op,
    /// so a stale handle cannot double-cancel.
    pub fn pause(&mut self) {
        if let PlayState::Running(handle) = std::mem::replace(&mut self.state, PlayState::Paused) {
            handle.abort();
            debug!("playback paused");
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.pause();
    }
}
