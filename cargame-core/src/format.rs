use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Day first, with milliseconds after the seconds.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S:%3f";
pub const INVALID_DATE: &str = "Invalid date";

/// Format a backend timestamp for display.
///
/// Accepts RFC 3339 instants (shown in UTC), zone-less ISO local date-times,
/// and bare dates. Returns `None` for a missing or blank value.
#[must_use]
pub fn format_date(value: Option<&str>) -> Option<String> {
    let value = value.map(str::trim).filter(|value| !value.is_empty())?;
    Some(parse_timestamp(value).map_or_else(
        || INVALID_DATE.to_string(),
        |timestamp| timestamp.format(DISPLAY_FORMAT).to_string(),
    ))
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.naive_utc());
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(local);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_date_time_keeps_wall_clock() {
        assert_eq!(
            format_date(Some("2019-03-01T14:05:09.123")).as_deref(),
            Some("01.03.2019 14:05:09:123")
        );
        assert_eq!(
            format_date(Some("2019-03-01T14:05:09")).as_deref(),
            Some("01.03.2019 14:05:09:000")
        );
    }

    #[test]
    fn instants_are_shown_in_utc() {
        assert_eq!(
            format_date(Some("2019-03-01T14:05:09.5+02:00")).as_deref(),
            Some("01.03.2019 12:05:09:500")
        );
        assert_eq!(
            format_date(Some("2019-03-01T14:05:09Z")).as_deref(),
            Some("01.03.2019 14:05:09:000")
        );
    }

    #[test]
    fn bare_dates_start_at_midnight() {
        assert_eq!(
            format_date(Some("2020-12-31")).as_deref(),
            Some("31.12.2020 00:00:00:000")
        );
    }

    #[test]
    fn missing_and_garbage_values() {
        assert_eq!(format_date(None), None);
        assert_eq!(format_date(Some("  ")), None);
        assert_eq!(format_date(Some("yesterday")).as_deref(), Some(INVALID_DATE));
    }
}
