//! Directory traversal.
//!
//! Produces the flat, deterministic list of paths that the metadata store
//! reconciles against. The walk is eager and synchronous: a partially read
//! tree is never handed out.

mod walker;

pub use walker::{WalkError, walk};
