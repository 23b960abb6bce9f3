//! Markdown renderers for both reports.
//!
//! Renderers are pure: every clock reading and derived value arrives pre-computed in a view.

#![forbid(unsafe_code)]

mod health;
mod model;
mod number;
mod weekly;

pub use health::render_health;
pub use model::{HealthView, WeeklyView};
pub use number::group_thousands;
pub use weekly::render_weekly;
