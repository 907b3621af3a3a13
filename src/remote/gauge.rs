//! In-flight request gauge backing the view layer's loading indicator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counter of in-flight remote operations.
///
/// The client increments the gauge before dispatching a call and the guard
/// decrements it on drop, so every exit path (success, API error,
/// transport failure) releases the indicator.
#[derive(Debug, Clone, Default)]
pub struct BusyGauge {
    in_flight: Arc<AtomicUsize>,
}

impl BusyGauge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any remote operation is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }

    /// Number of operations currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Mark an operation as started; the returned guard marks it finished
    /// when dropped.
    pub fn enter(&self) -> BusyGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

/// RAII handle for one in-flight operation.
#[derive(Debug)]
pub struct BusyGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
