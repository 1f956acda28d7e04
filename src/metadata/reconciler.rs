use std::path::PathBuf;

use snafu::ResultExt;
use tracing::debug;

use crate::filesystem;
use crate::metadata::store::UpdateSnafu;
use crate::metadata::{MetadataError, MetadataStore};

/// Paths that appeared and disappeared during one reconciliation cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

impl MetadataStore {
    /// Runs one reconciliation cycle against a fresh walk of the target.
    ///
    /// The walk completes before any flag is touched, so a failed walk leaves
    /// the store exactly as it was after the previous cycle.
    pub fn reconcile(&mut self) -> Result<ChangeSet, MetadataError> {
        let walked = filesystem::walk(self.target()).context(UpdateSnafu {
            target: self.target().to_path_buf(),
        })?;

        self.reset_seen();

        let mut changes = ChangeSet::default();
        for path in walked {
            if self.includes(&path) {
                self.mark_seen(&path);
            } else {
                changes.added.push(path.clone());
                self.add(path);
            }
        }

        changes.removed = self.remove_unseen();

        debug!(
            "Reconciled {}: {} added, {} removed, {} tracked",
            self.target().display(),
            changes.added.len(),
            changes.removed.len(),
            self.len()
        );
        Ok(changes)
    }
}
