//! Branch naming for generated lessons.

use chrono::{DateTime, Local, TimeZone};

/// Prefix of generated branch names.
pub const BRANCH_PREFIX: &str = "lesson";

/// Branch name for a run started at `now`: `lesson-YYYYMMDD-HHMMSS`.
pub fn branch_name_at<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}-{}", BRANCH_PREFIX, now.format("%Y%m%d-%H%M%S"))
}

/// Branch name for a run starting now, in local time.
pub fn default_branch_name() -> String {
    branch_name_at(&Local::now())
}
