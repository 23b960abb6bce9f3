//! Remote repository statistics.
//!
//! One authenticated GET per run against `{api_base}/repos/{owner}/{name}`. The payload is
//! decoded defensively into [`RemoteStats`]; field shapes never cause a failure.

#![forbid(unsafe_code)]

mod client;
mod error;

pub use client::{GithubClient, StatsSource};
pub use error::FetchError;
pub use repopulse_types::RemoteStats;
