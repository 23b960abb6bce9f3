//! Stable value objects and constants shared across the repopulse workspace.
//!
//! This crate is intentionally boring:
//! - the local snapshot and extension histogram consumed by the weekly report
//! - the loosely-typed remote stats record and the derived health values
//! - fixed report paths and scoring constants

#![forbid(unsafe_code)]

pub mod credentials;
pub mod histogram;
pub mod ids;
pub mod remote;
pub mod snapshot;

pub use credentials::Credentials;
pub use histogram::{ExtensionCount, ExtensionHistogram};
pub use remote::{HealthScore, IssueSplit, RemoteStats};
pub use snapshot::RepoSnapshot;
