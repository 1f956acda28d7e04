use std::path::{Path, PathBuf};

/// One tracked filesystem path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    is_root: bool,
    seen: bool,
}

impl Entry {
    pub fn new(path: PathBuf, is_root: bool) -> Self {
        Self {
            path,
            is_root,
            seen: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True only for the entry of the watched target itself.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Whether the latest walk confirmed this path.
    pub fn seen(&self) -> bool {
        self.seen
    }

    pub(super) fn set_seen(&mut self, seen: bool) {
        self.seen = seen;
    }
}
