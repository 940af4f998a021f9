use std::time::Instant;

/// Source of time in milliseconds. Only differences between readings matter.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Milliseconds since the clock was created. Monotonic, so wall-clock
/// adjustments never stall the submit debounce.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    started: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}
