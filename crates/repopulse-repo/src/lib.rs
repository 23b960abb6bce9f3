//! Repository adapters: version-control lookups and working-tree file counts.
//!
//! This crate is allowed to do filesystem IO and to spawn `git`. Every git lookup fails soft;
//! callers get a value or a default, never an error.

#![forbid(unsafe_code)]

mod git;
mod walk;

pub use git::{CommandRunner, SystemRunner, collect_snapshot, try_lookup};
pub use walk::{ExcludeSet, count_extensions};
