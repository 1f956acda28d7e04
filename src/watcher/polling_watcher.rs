use std::pin::pin;

use compio::time::sleep;
use futures::future::{Either, select};
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::metadata::{ChangeSet, MetadataError, MetadataStore};
use crate::watcher::{CancellationSignal, WatcherConfig};

/// Drives [`MetadataStore::reconcile`] on a fixed interval.
#[derive(Debug, Clone)]
pub struct PollingWatcher {
    config: WatcherConfig,
}

impl PollingWatcher {
    pub fn new(config: WatcherConfig) -> Self {
        Self { config }
    }

    /// Reconciles `store` every interval until `cancelled` resolves.
    ///
    /// The first cycle runs one interval after the call. The next wait only
    /// starts once a cycle has finished, so cycles never overlap and late
    /// ticks are not made up for. Cancellation is checked while waiting and
    /// never interrupts a walk. Returns `Ok(())` when cancelled and stops on
    /// the first failed reconciliation.
    pub async fn run(
        &self,
        store: &mut MetadataStore,
        mut cancelled: CancellationSignal,
    ) -> Result<(), WatchError> {
        info!(
            "Watching {} every {:?}",
            store.target().display(),
            self.config.interval
        );

        loop {
            let tick = pin!(sleep(self.config.interval));
            if let Either::Left(_) = select(&mut cancelled, tick).await {
                info!("Stopped watching {}", store.target().display());
                return Ok(());
            }

            let changes = store.reconcile().context(ReconcileSnafu)?;
            report_changes(&changes);
            store.inspect();
        }
    }
}

fn report_changes(changes: &ChangeSet) {
    if changes.is_empty() {
        debug!("No changes detected");
        return;
    }

    for path in &changes.added {
        info!("Added {}", path.display());
    }
    for path in &changes.removed {
        info!("Removed {}", path.display());
    }
}

#[derive(Debug, Snafu)]
pub enum WatchError {
    #[snafu(display("Stopped watching after a failed reconciliation"))]
    ReconcileError { source: MetadataError },
}
