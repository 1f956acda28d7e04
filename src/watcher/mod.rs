//! Interval-driven reconciliation of a [`MetadataStore`](crate::metadata::MetadataStore).
//!
//! The loop is cooperative: cancellation is only observed while waiting for
//! the next tick, an in-flight walk always runs to completion.

mod cancellation;
mod polling_watcher;
mod watcher_config;

pub use cancellation::{CancellationHandle, CancellationSignal, cancellation};
pub use polling_watcher::{PollingWatcher, WatchError};
pub use watcher_config::WatcherConfig;
