use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::BestEffortPathExt;
use crate::filesystem::{self, WalkError};
use crate::metadata::Entry;

/// Ordered list of every known path under the target.
///
/// Insertion order is preserved and the root entry is always first.
/// Between reconciliation cycles every entry is marked seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataStore {
    entries: Vec<Entry>,
    target: PathBuf,
}

impl MetadataStore {
    /// Builds the store from one walk of `target`, in walk order.
    pub fn load(target: impl Into<PathBuf>) -> Result<Self, MetadataError> {
        let target = target.into();
        debug!("Loading {}", target.best_effort_path_display());

        let paths = filesystem::walk(&target).context(LoadSnafu {
            target: target.clone(),
        })?;

        let mut store = Self {
            entries: Vec::with_capacity(paths.len()),
            target,
        };
        for path in paths {
            store.add(path);
        }

        debug!("Loaded {} entries", store.len());
        Ok(store)
    }

    /// Appends a seen entry. Uniqueness is the caller's responsibility.
    pub fn add(&mut self, path: PathBuf) {
        let is_root = path == self.target;
        self.entries.push(Entry::new(path, is_root));
    }

    pub fn includes(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry.path() == path)
    }

    /// Marks the entry for `path` as seen. Unknown paths are ignored.
    pub fn mark_seen(&mut self, path: &Path) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.path() == path) {
            entry.set_seen(true);
        }
    }

    pub fn reset_seen(&mut self) {
        for entry in &mut self.entries {
            entry.set_seen(false);
        }
    }

    /// Drops every unseen entry except the root and returns the dropped paths
    /// in store order.
    pub fn remove_unseen(&mut self) -> Vec<PathBuf> {
        let (kept, removed): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.is_root() || entry.seen());

        self.entries = kept;
        removed
            .into_iter()
            .map(|entry| entry.path().to_path_buf())
            .collect()
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(Entry::path)
    }

    /// Owned copy of the current entries for readers outside the polling loop.
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Logs every tracked path at debug level.
    pub fn inspect(&self) {
        debug!(
            "Watching {} paths under {}",
            self.len(),
            self.target.display()
        );
        for entry in &self.entries {
            debug!("path: {}, root: {}", entry.path().display(), entry.is_root());
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum MetadataError {
    #[snafu(display("Failed to load target directory {}", target.best_effort_path_display()))]
    LoadError { target: PathBuf, source: WalkError },
    #[snafu(display("Failed to update target directory {}", target.best_effort_path_display()))]
    UpdateError { target: PathBuf, source: WalkError },
}
