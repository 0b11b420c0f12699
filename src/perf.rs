//! Timing instrumentation for the gesture hot paths.
//!
//! Pointer-move handlers run on every event of a drag or resize. Enable the
//! `profiling` feature to time them:
//! ```toml
//! [dependencies]
//! layout_canvas = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn update(&mut self) {
//!     profile_scope!("gesture_update");
//!     // ... work ...
//! }
//! ```

use crate::constants::POINTER_MOVE_BUDGET_MS;
use std::time::Instant;
use tracing::warn;

/// Time the enclosing scope. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_pointer_handler($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// A scoped timer that warns on drop when its budget was exceeded.
#[derive(Debug)]
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the pointer-move budget.
    pub fn for_pointer_handler(name: &'static str) -> Self {
        Self::new(name, POINTER_MOVE_BUDGET_MS)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow gesture handler"
            );
        }
    }
}
