use std::sync::Arc;
use std::time::Instant;

use crate::constants::UPTIME_INTERFACE;
use crate::container::ServiceInterface;

pub trait UptimeService: Send + Sync {
    /// Milliseconds since the service was created.
    fn uptime_ms(&self) -> u128;
}

impl ServiceInterface for dyn UptimeService {
    const TYPE_NAME: &'static str = UPTIME_INTERFACE;
}

/// Starts timing when constructed. Bind it as a singleton to measure process
/// uptime.
pub struct StopwatchUptimeService {
    started: Instant,
}

impl StopwatchUptimeService {
    pub fn new() -> Self {
        Self { started: Instant::now() }
    }
}

impl Default for StopwatchUptimeService {
    fn default() -> Self {
        Self::new()
    }
}

impl UptimeService for StopwatchUptimeService {
    fn uptime_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }
}

pub fn stopwatch_uptime_service() -> Arc<dyn UptimeService> {
    Arc::new(StopwatchUptimeService::new())
}
