use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Unix `date`-style timestamp. `%Z` renders the offset's `Display`: `UTC` for
/// `Utc`, a numeric offset such as `+02:00` for `Local` and `FixedOffset`.
const TITLE_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

pub fn format_title<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("⏰ {}", at.format(TITLE_FORMAT))
}

pub fn default_title() -> String {
    format_title(&Local::now())
}
