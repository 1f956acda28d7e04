use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;
use walkdir::WalkDir;

use crate::ext::{BestEffortPathExt, clean_path};

/// Walks the tree rooted at `root` depth-first and returns every path in it.
///
/// The root comes first, exactly as supplied. Descendants are lexically
/// cleaned, so walking `./testdir` yields `./testdir` followed by
/// `testdir/...`. Siblings are visited in file name order, which keeps the
/// result stable for an unchanged tree. Symlinks are listed but not followed.
///
/// Any unreadable directory fails the whole walk.
pub fn walk(root: &Path) -> Result<Vec<PathBuf>, WalkError> {
    debug!("Walking {}", root.best_effort_path_display());

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.with_context(|err| WalkSnafu {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
        })?;

        if entry.depth() == 0 {
            paths.push(root.to_path_buf());
        } else {
            paths.push(clean_path(entry.path()));
        }
    }

    debug!("Walk of {} found {} paths", root.display(), paths.len());
    Ok(paths)
}

#[derive(Debug, Snafu)]
#[snafu(display("Failed to walk {}", path.best_effort_path_display()))]
pub struct WalkError {
    path: PathBuf,
    source: walkdir::Error,
}

impl WalkError {
    /// The path that could not be read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
