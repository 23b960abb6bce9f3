//! Use case orchestration for repopulse.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo,
//! remote and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing, environment capture and
//! exit codes.

#![forbid(unsafe_code)]

mod health;
mod weekly;
mod write;

pub use health::{HealthInput, HealthOutcome, SkipReason, run_health};
pub use weekly::{WeeklyInput, WeeklyOutcome, run_weekly};
pub use write::{resolve_out, write_if_changed, write_text};
