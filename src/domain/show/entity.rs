use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::artist::ArtistId;
use crate::domain::venue::VenueId;

pub type ShowId = i64;

/// A show that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: DateTime<Utc>,
}

/// Layouts accepted from the show form, tried in order after RFC 3339.
/// Naive values are taken as UTC.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a submitted start time, truncated to whole seconds
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc).trunc_subsecs(0));
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc().trunc_subsecs(0))
}

/// Text stored in `shows.start_time`.
///
/// Fixed width, UTC, second precision. Older rows may use another layout,
/// so SQL compares through `julianday()`.
pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
