// Thin entry points for the external request layer. Each call resolves the
// caller, delegates to a handler or query service and maps errors.

pub mod carry_over;
pub mod config;
pub mod dashboard;
pub mod day_start;
pub mod stats;
pub mod task;
pub mod team;
pub mod template;
pub mod user;

pub use carry_over::*;
pub use config::*;
pub use dashboard::*;
pub use day_start::*;
pub use stats::*;
pub use task::*;
pub use team::*;
pub use template::*;
pub use user::*;

use chrono::{Local, NaiveDate};

/// Calendar day in the server's local time zone.
pub(crate) fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
