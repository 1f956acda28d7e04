//! In-memory metadata of the watched tree.
//!
//! The [`MetadataStore`] is the single source of truth for which paths are
//! known. It is filled by an initial walk and kept current by
//! [`MetadataStore::reconcile`], which diffs a fresh walk against it.

mod entry;
mod reconciler;
mod store;

pub use entry::Entry;
pub use reconciler::ChangeSet;
pub use store::{MetadataError, MetadataStore};
