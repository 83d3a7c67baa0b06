use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Option<Tz> {
    config::time_zone().and_then(|name| name.parse::<Tz>().ok())
}

/// Wall-clock "now" used for day comparisons: the configured zone when set,
/// otherwise the browser's local time.
pub fn now_local() -> NaiveDateTime {
    match app_time_zone() {
        Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
        None => Local::now().naive_local(),
    }
}

/// An instant on the app's wall clock.
pub fn local_clock(at: DateTime<Utc>) -> NaiveDateTime {
    match app_time_zone() {
        Some(tz) => at.with_timezone(&tz).naive_local(),
        None => at.with_timezone(&Local).naive_local(),
    }
}

pub fn today_local() -> NaiveDate {
    now_local().date()
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// `2025-03-01T08:00:00.000Z` style, as produced by JS `toISOString`.
pub fn to_iso_millis(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso_millis_uses_z_suffix() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        assert_eq!(to_iso_millis(at), "2025-03-01T08:00:00.000Z");
    }

    #[test]
    fn now_local_without_zone_is_close_to_local_clock() {
        let diff = (now_local() - Local::now().naive_local()).num_seconds().abs();
        assert!(diff <= 1);
    }
}
