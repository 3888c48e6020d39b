use crate::types::LibraryItem;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a `dateAdded` value into a UTC timestamp.
///
/// Accepts RFC 3339 (`2024-01-02T03:04:05Z`, `...+02:00`, fractional seconds),
/// a date-time without offset (taken as UTC) and a bare `YYYY-MM-DD` date.
/// Anything else yields `None`.
pub fn parse_date_added(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sort key for a library item: its `dateAdded`, or the Unix epoch when the
/// value is missing or unparsable.
pub fn date_added_or_epoch<T: LibraryItem>(item: &T) -> DateTime<Utc> {
    item.date_added()
        .and_then(parse_date_added)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Sort items newest-added first. Items with equal timestamps keep their order.
pub fn sort_by_date_added_desc<T: LibraryItem>(items: &mut [T]) {
    items.sort_by_cached_key(|item| std::cmp::Reverse(date_added_or_epoch(item)));
}
