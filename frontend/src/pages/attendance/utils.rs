use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    api::{AttendanceRecord, AttendanceStatus, LastScan, ManualAttendanceRequest, Schedule},
    utils::{schedule_time, time::local_clock},
};

/// Delay between the last keystroke and the available-users query.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;
/// Session badge re-evaluation period.
pub const STATUS_TICK_MS: u32 = 60_000;

pub fn default_manual_notes(status: AttendanceStatus) -> String {
    format!("Manual entry by admin - Status: {}", status.as_str())
}

pub fn manual_request(
    user_id: &str,
    schedule_id: &str,
    status: AttendanceStatus,
    notes: &str,
    date: Option<&str>,
    now: DateTime<Utc>,
) -> ManualAttendanceRequest {
    let notes = notes.trim();
    ManualAttendanceRequest {
        user_id: user_id.to_string(),
        schedule_id: schedule_id.to_string(),
        status,
        notes: if notes.is_empty() {
            default_manual_notes(status)
        } else {
            notes.to_string()
        },
        scan_time: schedule_time::manual_scan_time(date, now),
    }
}

/// Newest schedule first, filtered by a case-insensitive query over class,
/// subject, instructor and the rendered date label.
pub fn filter_schedules(schedules: &[Schedule], query: &str) -> Vec<Schedule> {
    let needle = query.trim().to_lowercase();
    let mut matched: Vec<Schedule> = schedules
        .iter()
        .filter(|s| {
            if needle.is_empty() {
                return true;
            }
            let date_label = schedule_time::short_date_label(&s.schedule_date);
            [
                s.class_name.as_str(),
                s.subject.as_str(),
                s.instructor.as_str(),
                date_label.as_str(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    matched.sort_by(|a, b| {
        schedule_time::schedule_date(&b.schedule_date).cmp(&schedule_time::schedule_date(&a.schedule_date))
    });
    matched
}

pub fn schedule_title(schedule: &Schedule) -> String {
    if schedule.subject.trim().is_empty() {
        schedule.class_name.clone()
    } else {
        format!("{} - {}", schedule.class_name, schedule.subject)
    }
}

pub fn instructor_label(schedule: &Schedule) -> String {
    let name = schedule.instructor.trim();
    if name.is_empty() {
        "Not assigned".to_string()
    } else {
        name.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LastScanSummary {
    pub user: String,
    pub status: String,
    pub time: String,
}

pub fn last_scan_summary(scan: Option<&LastScan>) -> LastScanSummary {
    let Some(scan) = scan else {
        return LastScanSummary {
            user: "-".into(),
            status: "-".into(),
            time: "-".into(),
        };
    };
    LastScanSummary {
        user: scan
            .user
            .as_ref()
            .and_then(|u| u.username.clone())
            .unwrap_or_else(|| "-".into()),
        status: scan.status.as_str().to_string(),
        time: scan
            .scan_time
            .as_deref()
            .and_then(schedule_time::parse_instant)
            .map(|at| local_clock(at).format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".into()),
    }
}

pub fn scan_time_label(record: &AttendanceRecord) -> String {
    record
        .scan_time
        .as_deref()
        .and_then(schedule_time::parse_instant)
        .map(|at| local_clock(at).format("%H:%M").to_string())
        .unwrap_or_else(|| "-".into())
}

/// Row being edited. Entering edit on another row replaces it outright.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub attendance_id: String,
    pub status: AttendanceStatus,
    pub notes: String,
}

impl EditDraft {
    pub fn from_record(record: &AttendanceRecord) -> Self {
        Self {
            attendance_id: record.id.clone(),
            status: record.status,
            notes: record.notes.clone().unwrap_or_default(),
        }
    }
}

pub fn date_input_today(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn debounce() {}

#[cfg(target_arch = "wasm32")]
pub async fn debounce() {
    gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
}
