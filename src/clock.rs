/*
 * Quantum Clock Module
 *
 * This module tracks elapsed simulation time through a Stopped/Running/Paused
 * state machine. The clock itself never reads the system time: every
 * transition and tick takes an Instant, so the pause and reset semantics are
 * testable with synthetic timestamps. A ClockTicker samples a shared clock
 * from a background thread every 100ms and is fully cancelled (signalled and
 * joined) whenever the simulation pauses or stops, so no stale tick can land
 * after a reset.
 */

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

// Sampling period of the elapsed-time display
pub const CLOCK_TICK_INTERVAL: Duration = Duration::from_millis(100);

pub type SharedClock = Arc<Mutex<QuantumClock>>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClockPhase {
    Stopped,
    Running,
    Paused,
}

#[derive(Clone, Debug)]
pub struct QuantumClock {
    phase: ClockPhase,
    elapsed: Duration,
    last_sample: Option<Instant>,
}

impl QuantumClock {
    pub fn new() -> Self {
        Self {
            phase: ClockPhase::Stopped,
            elapsed: Duration::ZERO,
            last_sample: None,
        }
    }

    // Begin a fresh run: elapsed time restarts from zero
    pub fn start(&mut self, now: Instant) {
        self.phase = ClockPhase::Running;
        self.elapsed = Duration::ZERO;
        self.last_sample = Some(now);
    }

    pub fn pause(&mut self) {
        if self.phase == ClockPhase::Running {
            self.phase = ClockPhase::Paused;
            self.last_sample = None;
        }
    }

    // Resume from pause; the sample origin resets to now so the paused
    // interval never shows up as a catch-up jump
    pub fn resume(&mut self, now: Instant) {
        if self.phase == ClockPhase::Paused {
            self.phase = ClockPhase::Running;
            self.last_sample = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.phase = ClockPhase::Stopped;
        self.elapsed = Duration::ZERO;
        self.last_sample = None;
    }

    // Accumulate the wall-clock delta since the previous sample. Only
    // advances while Running; out-of-order instants saturate to zero.
    pub fn tick(&mut self, now: Instant) {
        if self.phase == ClockPhase::Running {
            if let Some(previous) = self.last_sample {
                self.elapsed += now.duration_since(previous);
            }
            self.last_sample = Some(now);
        }
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl Default for QuantumClock {
    fn default() -> Self {
        Self::new()
    }
}

// Background task that samples a shared clock every CLOCK_TICK_INTERVAL.
// Cancelling signals the thread and joins it before returning.
pub struct ClockTicker {
    shutdown: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ClockTicker {
    pub fn start(clock: SharedClock) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if let Ok(mut clock) = clock.lock() {
                clock.tick(Instant::now());
            }
            match shutdown_rx.recv_timeout(CLOCK_TICK_INTERVAL) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn cancel(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        // Dropping the sender disconnects the channel, which wakes the
        // thread immediately
        self.shutdown.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.halt();
    }
}
