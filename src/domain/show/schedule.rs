use chrono::{DateTime, Utc};
use serde::Serialize;

/// Shows split around a reference instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionedShows<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> PartitionedShows<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn total(&self) -> usize {
        self.past.len() + self.upcoming.len()
    }
}

/// Split `items` (given in insertion order) into past and upcoming.
///
/// A show starting at or after `now` is upcoming. Each list comes back
/// newest-inserted first; the lists are not sorted by start time.
pub fn partition_by_start_time<T, I, F>(
    items: I,
    now: DateTime<Utc>,
    start_time: F,
) -> PartitionedShows<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> DateTime<Utc>,
{
    let (mut upcoming, mut past): (Vec<T>, Vec<T>) =
        items.into_iter().partition(|item| start_time(item) >= now);

    upcoming.reverse();
    past.reverse();

    PartitionedShows { past, upcoming }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_partition_keeps_every_show() {
        let shows = vec![
            (1, now() - Duration::days(30)),
            (2, now() + Duration::days(3)),
            (3, now() - Duration::days(1)),
            (4, now() + Duration::days(90)),
        ];
        let split = partition_by_start_time(shows, now(), |s| s.1);

        assert_eq!(split.past.iter().map(|s| s.0).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(split.upcoming.iter().map(|s| s.0).collect::<Vec<_>>(), vec![4, 2]);
        assert_eq!(split.past_count() + split.upcoming_count(), 4);
        assert_eq!(split.total(), 4);
    }

    #[test]
    fn test_show_starting_now_is_upcoming() {
        let split = partition_by_start_time(vec![now()], now(), |s| *s);
        assert_eq!(split.upcoming_count(), 1);
        assert_eq!(split.past_count(), 0);
    }

    #[test]
    fn test_order_is_insertion_not_time() {
        // inserted out of chronological order
        let shows = vec![
            (1, now() + Duration::days(1)),
            (2, now() + Duration::days(10)),
            (3, now() + Duration::days(5)),
        ];
        let split = partition_by_start_time(shows, now(), |s| s.1);
        assert_eq!(split.upcoming.iter().map(|s| s.0).collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
