mod caller;
mod dates;

pub use caller::{load_caller, load_caller_team};
pub use dates::{format_date, parse_date, week_start};
