//! Pure derivations (no IO).
//!
//! Input: values gathered elsewhere (git output, file names, remote stats, a clock reading).
//! Output: the derived values the renderers consume.

#![forbid(unsafe_code)]

pub mod health;
pub mod histogram;
pub mod timefmt;

pub use health::{estimate_split, health_score};
pub use histogram::{HistogramBuilder, extension_label};
pub use timefmt::{commit_window_start, format_last_push, report_date, report_timestamp};

#[cfg(test)]
mod proptest;
