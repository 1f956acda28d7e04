use std::pin::pin;

use futures::future::{Either, select};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::ext::BestEffortPathExt;
use crate::metadata::{MetadataError, MetadataStore};
use crate::watcher::{PollingWatcher, WatchError, cancellation};

pub struct Application;

impl Application {
    /// Loads the target and polls it until Ctrl-C or a failed scan.
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();

        info!("Loading {}", app_config.target.best_effort_path_display());
        let mut store = MetadataStore::load(&app_config.target).context(LoadSnafu)?;
        store.inspect();

        let watcher = PollingWatcher::new(app_config.watcher.clone());
        let (handle, signal) = cancellation();

        let watching = pin!(watcher.run(&mut store, signal));
        let interrupted = pin!(compio::signal::ctrl_c());

        match select(watching, interrupted).await {
            Either::Left((result, _)) => result.context(WatchSnafu),
            Either::Right((interrupt, watching)) => {
                interrupt.context(SignalSnafu)?;
                info!("Got interrupt signal, stopping");
                handle.cancel();
                watching.await.context(WatchSnafu)
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the target directory"))]
    LoadError { source: MetadataError },
    #[snafu(display("Failed to listen for the interrupt signal"))]
    SignalError { source: std::io::Error },
    #[snafu(display("Critical failure encountered while watching the target directory"))]
    WatchError { source: WatchError },
}
