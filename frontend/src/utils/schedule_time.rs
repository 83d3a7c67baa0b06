//! Schedule time handling shared by every view.
//!
//! Schedule timestamps are read literally: the `HH:MM` after the `T` and the
//! leading `YYYY-MM-DD` are taken as written, with no timezone conversion.
//! Session status is the exception and compares full instants.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::utils::time::to_iso_millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl SessionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::NotStarted => "Not Started",
            SessionStatus::InProgress => "In Progress",
            SessionStatus::Completed => "Completed",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            SessionStatus::NotStarted => "bg-amber-100 text-amber-800 border-amber-200",
            SessionStatus::InProgress => "bg-green-100 text-green-800 border-green-200",
            SessionStatus::Completed => "bg-blue-100 text-blue-800 border-blue-200",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    Upcoming,
    Ongoing,
    Completed,
    Past,
    Unknown,
}

impl ScheduleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ScheduleStatus::Upcoming => "upcoming",
            ScheduleStatus::Ongoing => "ongoing",
            ScheduleStatus::Completed => "completed",
            ScheduleStatus::Past => "past",
            ScheduleStatus::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScheduleStatus::Upcoming => "Upcoming",
            ScheduleStatus::Ongoing => "Ongoing",
            ScheduleStatus::Completed => "Completed",
            ScheduleStatus::Past => "Finished",
            ScheduleStatus::Unknown => "Unknown",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ScheduleStatus::Upcoming => "bg-blue-100 text-blue-800",
            ScheduleStatus::Ongoing => "bg-green-100 text-green-800",
            ScheduleStatus::Completed | ScheduleStatus::Past => "bg-gray-100 text-gray-700",
            ScheduleStatus::Unknown => "bg-gray-50 text-gray-500",
        }
    }
}

/// `HH:MM` from the first `T(\d{2}):(\d{2})` occurrence, or `""`.
pub fn extract_time(value: &str) -> String {
    let bytes = value.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte != b'T' {
            continue;
        }
        let window = &bytes[i + 1..];
        if window.len() < 5 {
            break;
        }
        if window[0].is_ascii_digit()
            && window[1].is_ascii_digit()
            && window[2] == b':'
            && window[3].is_ascii_digit()
            && window[4].is_ascii_digit()
        {
            // ASCII digits and ':' only, so the slice is valid UTF-8.
            return value[i + 1..i + 6].to_string();
        }
    }
    String::new()
}

pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    let (h, m) = value.trim().split_once(':')?;
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    NaiveTime::from_hms_opt(h, m, 0)
}

/// Calendar date from the literal `YYYY-MM-DD` prefix.
pub fn schedule_date(value: &str) -> Option<NaiveDate> {
    let prefix = value.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn session_status(start: &str, end: &str, now: DateTime<Utc>) -> Option<SessionStatus> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;
    Some(if now < start {
        SessionStatus::NotStarted
    } else if now > end {
        SessionStatus::Completed
    } else {
        SessionStatus::InProgress
    })
}

pub fn schedule_status(
    schedule_date_value: &str,
    start: &str,
    end: &str,
    now: NaiveDateTime,
) -> ScheduleStatus {
    if schedule_date_value.trim().is_empty() || start.trim().is_empty() || end.trim().is_empty() {
        return ScheduleStatus::Unknown;
    }
    let Some(date) = schedule_date(schedule_date_value) else {
        return ScheduleStatus::Unknown;
    };
    let today = now.date();
    if date != today {
        return if date < today {
            ScheduleStatus::Past
        } else {
            ScheduleStatus::Upcoming
        };
    }

    let (Some(start_time), Some(end_time)) = (
        parse_clock(&extract_time(start)),
        parse_clock(&extract_time(end)),
    ) else {
        return ScheduleStatus::Unknown;
    };
    let start_at = today.and_time(start_time);
    let end_at = today.and_time(end_time);
    if now < start_at {
        ScheduleStatus::Upcoming
    } else if now > end_at {
        ScheduleStatus::Completed
    } else {
        ScheduleStatus::Ongoing
    }
}

/// "Wednesday, 15 January 2025"
pub fn date_label(value: &str) -> String {
    schedule_date(value)
        .map(|d| d.format("%A, %d %B %Y").to_string())
        .unwrap_or_default()
}

/// "Wednesday, Jan 15, 2025"
pub fn short_date_label(value: &str) -> String {
    schedule_date(value)
        .map(|d| d.format("%A, %b %-d, %Y").to_string())
        .unwrap_or_default()
}

pub fn day_name(value: &str) -> String {
    schedule_date(value)
        .map(|d| d.format("%A").to_string())
        .unwrap_or_default()
}

pub fn time_range(start: &str, end: &str) -> String {
    let (start, end) = (extract_time(start), extract_time(end));
    if start.is_empty() || end.is_empty() {
        return String::new();
    }
    format!("{} - {}", start, end)
}

pub fn duration_minutes(start: &str, end: &str) -> i64 {
    match (
        parse_clock(&extract_time(start)),
        parse_clock(&extract_time(end)),
    ) {
        (Some(s), Some(e)) => (e - s).num_minutes(),
        _ => 0,
    }
}

/// Form time `HH:MM` stored as a fixed-date UTC instant.
pub fn time_to_iso(value: &str) -> Option<String> {
    let time = parse_clock(value)?;
    Some(format!("2000-01-01T{}:00.000Z", time.format("%H:%M")))
}

/// Form date `YYYY-MM-DD` as UTC midnight.
pub fn date_to_iso(value: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
    Some(format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")))
}

/// Date input value (`YYYY-MM-DD`) for an ISO schedule date.
pub fn date_input_value(value: &str) -> String {
    schedule_date(value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Date sent as `?date=`; unparseable input falls back to `today`.
pub fn api_date(value: &str, today: NaiveDate) -> String {
    schedule_date(value)
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

/// Scan time for a manual entry: 08:00 UTC on the given day, else now.
pub fn manual_scan_time(date: Option<&str>, now: DateTime<Utc>) -> String {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => format!("{}T08:00:00.000Z", date),
        None => to_iso_millis(now),
    }
}

pub fn days_until(value: &str, today: NaiveDate) -> Option<i64> {
    schedule_date(value).map(|d| (d - today).num_days())
}

pub fn relative_day_label(value: &str, today: NaiveDate) -> String {
    match days_until(value, today) {
        Some(0) => "Today".to_string(),
        Some(1) => "Tomorrow".to_string(),
        Some(n) if (2..=7).contains(&n) => format!("in {} days", n),
        Some(n) if n > 7 => {
            let weeks = n / 7;
            format!("in {} {}", weeks, if weeks == 1 { "week" } else { "weeks" })
        }
        _ => String::new(),
    }
}

/// "2025-01-15 08:30" read literally from an ISO timestamp.
pub fn date_time_label(value: &str) -> String {
    let Some(date) = schedule_date(value) else {
        return String::new();
    };
    let time = extract_time(value);
    if time.is_empty() {
        date.format("%Y-%m-%d").to_string()
    } else {
        format!("{} {}", date.format("%Y-%m-%d"), time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn extract_time_reads_literal_clock() {
        assert_eq!(extract_time("2025-01-15T08:30:00.000Z"), "08:30");
        assert_eq!(extract_time("2000-01-01T23:05:00+07:00"), "23:05");
    }

    #[test]
    fn extract_time_degrades_to_empty() {
        assert_eq!(extract_time(""), "");
        assert_eq!(extract_time("not a date"), "");
        assert_eq!(extract_time("2025-01-15T8:30"), "");
        assert_eq!(extract_time("2025-01-15T08:3"), "");
        assert_eq!(extract_time("T"), "");
    }

    #[test]
    fn earlier_dates_are_past_regardless_of_time() {
        let now = at("2025-01-15", "07:00");
        assert_eq!(
            schedule_status("2025-01-14T00:00:00.000Z", "2000-01-01T23:00:00.000Z", "2000-01-01T23:59:00.000Z", now),
            ScheduleStatus::Past
        );
        assert_eq!(
            schedule_status("2024-12-01", "2000-01-01T08:00:00.000Z", "2000-01-01T09:00:00.000Z", now),
            ScheduleStatus::Past
        );
    }

    #[test]
    fn later_dates_are_upcoming() {
        let now = at("2025-01-15", "23:00");
        assert_eq!(
            schedule_status("2025-01-16T00:00:00.000Z", "2000-01-01T01:00:00.000Z", "2000-01-01T02:00:00.000Z", now),
            ScheduleStatus::Upcoming
        );
    }

    #[test]
    fn same_day_compares_clock_times() {
        let date = "2025-01-15T00:00:00.000Z";
        let start = "2000-01-01T08:00:00.000Z";
        let end = "2000-01-01T10:00:00.000Z";
        assert_eq!(schedule_status(date, start, end, at("2025-01-15", "07:59")), ScheduleStatus::Upcoming);
        assert_eq!(schedule_status(date, start, end, at("2025-01-15", "08:00")), ScheduleStatus::Ongoing);
        assert_eq!(schedule_status(date, start, end, at("2025-01-15", "10:00")), ScheduleStatus::Ongoing);
        assert_eq!(schedule_status(date, start, end, at("2025-01-15", "10:01")), ScheduleStatus::Completed);
    }

    #[test]
    fn malformed_fields_are_unknown() {
        let now = at("2025-01-15", "09:00");
        assert_eq!(schedule_status("", "2000-01-01T08:00:00Z", "2000-01-01T09:00:00Z", now), ScheduleStatus::Unknown);
        assert_eq!(schedule_status("garbage", "2000-01-01T08:00:00Z", "2000-01-01T09:00:00Z", now), ScheduleStatus::Unknown);
        assert_eq!(schedule_status("2025-01-15", "eight", "2000-01-01T09:00:00Z", now), ScheduleStatus::Unknown);
    }

    #[test]
    fn session_status_compares_instants() {
        let start = "2025-01-15T08:00:00.000Z";
        let end = "2025-01-15T10:00:00.000Z";
        let before = Utc.with_ymd_and_hms(2025, 1, 15, 7, 0, 0).unwrap();
        let during = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(session_status(start, end, before), Some(SessionStatus::NotStarted));
        assert_eq!(session_status(start, end, during), Some(SessionStatus::InProgress));
        assert_eq!(session_status(start, end, after), Some(SessionStatus::Completed));
        assert_eq!(session_status("bad", end, during), None);
    }

    #[test]
    fn session_status_honours_offsets() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 2, 0, 0).unwrap();
        // 08:00+07:00 is 01:00Z
        assert_eq!(
            session_status("2025-01-15T08:00:00+07:00", "2025-01-15T10:00:00+07:00", now),
            Some(SessionStatus::InProgress)
        );
    }

    #[test]
    fn manual_scan_time_anchors_to_eight_utc() {
        let now = Utc.with_ymd_and_hms(2025, 5, 2, 13, 45, 10).unwrap();
        assert_eq!(manual_scan_time(Some("2025-03-01"), now), "2025-03-01T08:00:00.000Z");
        assert_eq!(manual_scan_time(None, now), "2025-05-02T13:45:10.000Z");
        assert_eq!(manual_scan_time(Some(" "), now), "2025-05-02T13:45:10.000Z");
    }

    #[test]
    fn form_conversions_use_fixed_utc_anchor() {
        assert_eq!(time_to_iso("08:05").as_deref(), Some("2000-01-01T08:05:00.000Z"));
        assert_eq!(time_to_iso("8:5").as_deref(), Some("2000-01-01T08:05:00.000Z"));
        assert!(time_to_iso("25:00").is_none());
        assert_eq!(date_to_iso("2025-03-01").as_deref(), Some("2025-03-01T00:00:00.000Z"));
        assert!(date_to_iso("03/01/2025").is_none());
        assert_eq!(date_input_value("2025-03-01T00:00:00.000Z"), "2025-03-01");
    }

    #[test]
    fn labels_and_ranges() {
        assert_eq!(date_label("2025-01-15T00:00:00.000Z"), "Wednesday, 15 January 2025");
        assert_eq!(short_date_label("2025-01-15"), "Wednesday, Jan 15, 2025");
        assert_eq!(day_name("2025-01-15"), "Wednesday");
        assert_eq!(date_label("nope"), "");
        assert_eq!(
            time_range("2000-01-01T08:00:00.000Z", "2000-01-01T09:30:00.000Z"),
            "08:00 - 09:30"
        );
        assert_eq!(time_range("", "2000-01-01T09:30:00.000Z"), "");
        assert_eq!(duration_minutes("2000-01-01T08:00:00.000Z", "2000-01-01T09:30:00.000Z"), 90);
        assert_eq!(duration_minutes("x", "2000-01-01T09:30:00.000Z"), 0);
        assert_eq!(date_time_label("2025-01-15T08:23:15.000Z"), "2025-01-15 08:23");
    }

    #[test]
    fn api_date_falls_back_to_today() {
        assert_eq!(api_date("2025-02-03", today()), "2025-02-03");
        assert_eq!(api_date("2025-02-03T10:00:00Z", today()), "2025-02-03");
        assert_eq!(api_date("invalid", today()), "2025-01-15");
    }

    #[test]
    fn relative_labels() {
        assert_eq!(relative_day_label("2025-01-15", today()), "Today");
        assert_eq!(relative_day_label("2025-01-16", today()), "Tomorrow");
        assert_eq!(relative_day_label("2025-01-20", today()), "in 5 days");
        assert_eq!(relative_day_label("2025-01-23", today()), "in 1 week");
        assert_eq!(relative_day_label("2025-02-05", today()), "in 3 weeks");
        assert_eq!(relative_day_label("2025-01-10", today()), "");
    }
}
