//! Builds the four chains, holds shared tracker state, runs the worker
//! thread, and exposes the public `Tracker` API (spec.md §4.6, §5, §6).

mod calibrate;
mod callbacks;
mod chains;
mod fix_drift;
mod state;
mod thresholds;

pub use callbacks::TrackerCallbacks;
pub use state::TrackerState;
pub use thresholds::Thresholds;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{error, info};

use crate::config::Configuration;
use crate::event::{AxesEvent, EventKind, OrientationEvent, SensorStats};
use crate::pipeline;
use crate::queue::{BlockingQueue, PopResult};

/// The real-time inertial tracker.
///
/// Created inert. `start()` (or delivering a `START` event via
/// `receive_event`) resets all state and spawns the worker thread;
/// `stop()` (or a `STOP` event) drains and joins it.
pub struct Tracker {
    state: Arc<Mutex<TrackerState>>,
    callbacks: TrackerCallbacks,
    config: Configuration,
    queue: Arc<BlockingQueue<AxesEvent>>,
    worker: Option<JoinHandle<()>>,
    stopped: Arc<AtomicBool>,
}

impl Tracker {
    /// An inert tracker: no worker running, identity/zeroed state,
    /// an empty configuration (every key falls back to its default).
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(TrackerState::new())),
            callbacks: TrackerCallbacks::new(),
            config: Configuration::new(),
            queue: Arc::new(BlockingQueue::new()),
            worker: None,
            stopped: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A mutable reference to the configuration map. Only meaningful
    /// before `start()`: thresholds are resolved once per run.
    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// Configure the queue's bounded wait. `None` (the default) means
    /// "never" — `pop_front` blocks indefinitely.
    pub fn set_queue_timeout(&self, timeout: Option<Duration>) {
        self.queue.set_timeout(timeout);
    }

    fn lock_state(&self) -> MutexGuard<'_, TrackerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Reset all state and spawn the worker thread.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            self.stop();
        }

        *self.lock_state() = TrackerState::new();
        self.queue.clear();
        self.stopped.store(false, Ordering::SeqCst);

        let thresholds = Thresholds::from_config(&self.config);
        let mut accel_chain = chains::build_accel_chain(&thresholds, &self.callbacks);
        let mut gyro_chain = chains::build_gyro_chain(&thresholds, &self.callbacks);
        let mut mag_chain = chains::build_mag_chain(&thresholds, &self.callbacks);
        let mut linear_chain = chains::build_linear_chain(&thresholds, &self.callbacks);

        let state = Arc::clone(&self.state);
        let queue = Arc::clone(&self.queue);
        let stopped = Arc::clone(&self.stopped);

        let handle = thread::Builder::new()
            .name("tracker-worker".to_string())
            .spawn(move || {
                loop {
                    let event = match queue.pop_front() {
                        PopResult::Item(event) => event,
                        PopResult::TimedOut => {
                            error!("tracker worker queue timed out; exiting");
                            break;
                        }
                    };
                    if event.kind == EventKind::Stop {
                        break;
                    }
                    let mut guard = state.lock().unwrap_or_else(|e| e.into_inner());
                    match event.kind {
                        EventKind::Accelerometer => {
                            pipeline::run(&mut *accel_chain, event, &mut guard)
                        }
                        EventKind::Gyroscope => {
                            pipeline::run(&mut *gyro_chain, event, &mut guard)
                        }
                        EventKind::MagneticField => {
                            pipeline::run(&mut *mag_chain, event, &mut guard)
                        }
                        EventKind::LinearAcceleration => {
                            pipeline::run(&mut *linear_chain, event, &mut guard)
                        }
                        _ => {}
                    }
                }
                stopped.store(true, Ordering::SeqCst);
            })
            .expect("failed to spawn tracker-worker thread");

        self.worker = Some(handle);
        info!("tracker worker started");
    }

    /// Signal the worker to drain and exit, then join it. A no-op if no
    /// worker is running.
    pub fn stop(&mut self) {
        self.queue.push_back(AxesEvent::zero(EventKind::Stop, 0));
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// `true` once the worker has exited (either never started, or
    /// stopped/timed out).
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// `true` once all three sensors have first reported stillness
    /// simultaneously.
    pub fn calibrated(&self) -> bool {
        self.lock_state().calibrated
    }

    /// Enqueue a sensor event, or act on a `START`/`STOP` control event.
    pub fn receive_event(&mut self, event: AxesEvent) {
        match event.kind {
            EventKind::Start => self.start(),
            EventKind::Stop => self.queue.push_back(event),
            _ => self.queue.push_back(event),
        }
    }

    /// Current orientation estimate.
    pub fn orientation(&self) -> OrientationEvent {
        self.lock_state().orientation
    }

    /// Current linear velocity estimate.
    pub fn velocity(&self) -> AxesEvent {
        self.lock_state().velocity
    }

    /// Current linear displacement estimate.
    pub fn displacement(&self) -> AxesEvent {
        self.lock_state().displacement
    }

    /// Accelerometer sliding-window statistics.
    pub fn accelerometer_stats(&self) -> SensorStats {
        self.lock_state().stats_acc.clone()
    }

    /// Gyroscope sliding-window statistics.
    pub fn gyroscope_stats(&self) -> SensorStats {
        self.lock_state().stats_gyr.clone()
    }

    /// Magnetometer sliding-window statistics.
    pub fn magnetic_field_stats(&self) -> SensorStats {
        self.lock_state().stats_mag.clone()
    }

    /// The tracker's host-facing callback slots (see `SPEC_FULL.md`
    /// §4.6/§6 — setters for the nine distinct callback points).
    pub fn callbacks(&self) -> &TrackerCallbacks {
        &self.callbacks
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.stop();
        }
    }
}
