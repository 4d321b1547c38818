// src/application/format.rs
//
// Human-readable timestamps for show cards

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// "Saturday May, 21, 2019 at 9:30PM"
    Full,
    /// "Sat 05, 21, 2019 9:30PM"
    #[default]
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

pub fn format_datetime(value: &DateTime<Utc>, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}
