use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::watcher::WatcherConfig;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub target: PathBuf,
    pub watcher: WatcherConfig,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            target: cli.target_directory,
            watcher: WatcherConfig::with_interval(Duration::from_millis(cli.interval_ms)),
        }
    }
}
