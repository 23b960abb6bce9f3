//! Clock-derived strings used by both reports.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Length of the trailing commit-count window.
pub const COMMIT_WINDOW_DAYS: i64 = 7;

/// Midnight UTC, seven days before `now`'s UTC date, as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn commit_window_start(now: OffsetDateTime) -> Result<String, time::error::Format> {
    let today = now.to_offset(UtcOffset::UTC).date();
    let start = today
        .checked_sub(Duration::days(COMMIT_WINDOW_DAYS))
        .unwrap_or(today);
    start
        .midnight()
        .assume_utc()
        .format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z"))
}

/// `YYYY-MM-DD` of `now` in UTC.
pub fn report_date(now: OffsetDateTime) -> Result<String, time::error::Format> {
    now.to_offset(UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day]"))
}

/// `YYYY-MM-DD HH:MM:SS UTC` of `now`.
pub fn report_timestamp(now: OffsetDateTime) -> Result<String, time::error::Format> {
    now.to_offset(UtcOffset::UTC).format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second] UTC"
    ))
}

/// Reformat the remote last-push timestamp for display.
///
/// Accepts RFC 3339 (a trailing `Z` is UTC), naive `YYYY-MM-DD[T ]HH:MM:SS` (taken as UTC), and a
/// bare date. Anything else, including the `"Unknown"` placeholder, is returned unchanged.
pub fn format_last_push(raw: &str) -> String {
    parse_iso8601(raw.trim())
        .and_then(|dt| report_timestamp(dt).ok())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_iso8601(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }
    let naive = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    ];
    for fmt in naive {
        if let Ok(dt) = PrimitiveDateTime::parse(raw, fmt) {
            return Some(dt.assume_utc());
        }
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn zulu_timestamp_is_reformatted() {
        assert_eq!(
            format_last_push("2024-01-15T10:30:00Z"),
            "2024-01-15 10:30:00 UTC"
        );
    }

    #[test]
    fn explicit_offset_is_converted_to_utc() {
        assert_eq!(
            format_last_push("2024-01-15T12:30:00+02:00"),
            "2024-01-15 10:30:00 UTC"
        );
    }

    #[test]
    fn naive_and_date_only_inputs_are_taken_as_utc() {
        assert_eq!(
            format_last_push("2024-01-15T10:30:00"),
            "2024-01-15 10:30:00 UTC"
        );
        assert_eq!(
            format_last_push("2024-01-15 10:30:00"),
            "2024-01-15 10:30:00 UTC"
        );
        assert_eq!(format_last_push("2024-01-15"), "2024-01-15 00:00:00 UTC");
    }

    #[test]
    fn unparsable_input_passes_through() {
        assert_eq!(format_last_push("Unknown"), "Unknown");
        assert_eq!(format_last_push("last tuesday"), "last tuesday");
        assert_eq!(format_last_push(""), "");
    }

    #[test]
    fn window_starts_at_midnight_seven_days_back() {
        let now = datetime!(2024-03-05 17:45:12 UTC);
        assert_eq!(
            commit_window_start(now).expect("format"),
            "2024-02-27T00:00:00Z"
        );
    }

    #[test]
    fn window_uses_utc_date_of_offset_clock() {
        // 01:00 at +03:00 is still the previous day in UTC.
        let now = datetime!(2024-03-05 01:00:00 +03:00);
        assert_eq!(
            commit_window_start(now).expect("format"),
            "2024-02-26T00:00:00Z"
        );
    }

    #[test]
    fn report_stamps() {
        let now = datetime!(2024-01-15 10:30:05 UTC);
        assert_eq!(report_date(now).expect("format"), "2024-01-15");
        assert_eq!(
            report_timestamp(now).expect("format"),
            "2024-01-15 10:30:05 UTC"
        );
    }
}
