use std::time::Duration;

/// Pause between the end of one reconciliation and the start of the next
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherConfig {
    pub interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WatcherConfig {
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }
}
