/*
 * Observer Signal Module
 *
 * Single-slot shared cell carrying the "observer active" boolean between an
 * asynchronous detector (webcam pipeline, UI toggle, test thread) and the
 * render loop. Plain atomic reads/writes, last-write-wins; the value only
 * influences future spawn decisions, never in-flight entities.
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct ObserverSignal {
    active: Arc<AtomicBool>,
}

impl ObserverSignal {
    // Starts inactive: wave mode until a detector says otherwise
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

impl Default for ObserverSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn defaults_to_inactive() {
        assert!(!ObserverSignal::new().is_active());
    }

    #[test]
    fn round_trips_writes() {
        let signal = ObserverSignal::new();
        signal.set_active(true);
        assert!(signal.is_active());
        signal.set_active(false);
        assert!(!signal.is_active());
    }

    #[test]
    fn cross_thread_write_is_visible_after_join() {
        let signal = ObserverSignal::new();
        let producer = signal.clone();
        thread::spawn(move || producer.set_active(true))
            .join()
            .unwrap();
        assert!(signal.is_active());
    }
}
