mod maths_utils;
mod perf;
mod time_utils;

pub type AppInstant = std::time::Instant;

pub use maths_utils::{
    arg_max, arg_min, mean, pct_changes, period_diffs, round_units, running_sum,
};
pub use time_utils::{
    capitalize_first, month_end_dates, month_label, next_month_ends, short_month_label,
};
