use std::time::{Duration, Instant};

/// Process-wide state shared with every worker through `web::Data`.
///
/// Holds only the instant the service started; uptime is measured against it
/// on a monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
