use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::{ApiError, AuditLog, ChartBucket, DashboardStats, Schedule},
    utils::schedule_time::{self, extract_time, parse_instant, schedule_date},
};

pub const UPCOMING_LIMIT: usize = 5;
pub const ACTIVITY_LIMIT: usize = 10;

/// One dashboard widget: last good data plus load/error flags.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for WidgetState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> WidgetState<T> {
    /// A cache hit is shown immediately and is not "loading".
    pub fn from_cache(cached: Option<T>) -> Self {
        Self {
            loading: cached.is_none(),
            data: cached,
            error: None,
        }
    }
}

/// Failures only surface when there is nothing to show; otherwise the stale
/// data stays and the error is dropped.
pub fn apply_result<T>(current: WidgetState<T>, result: Result<T, ApiError>, fallback: &str) -> WidgetState<T> {
    match result {
        Ok(data) => WidgetState {
            data: Some(data),
            loading: false,
            error: None,
        },
        Err(err) if current.data.is_some() => {
            log::warn!("keeping stale dashboard data: {}", err);
            WidgetState {
                data: current.data,
                loading: false,
                error: None,
            }
        }
        Err(err) => WidgetState {
            data: None,
            loading: false,
            error: Some(err.user_message(fallback)),
        },
    }
}

pub fn total_members(stats: &DashboardStats) -> u32 {
    stats.members + stats.cadets + stats.main_team
}

/// Largest bucket value, for bar scaling. Never zero.
pub fn chart_max(buckets: &[ChartBucket]) -> u32 {
    buckets
        .iter()
        .flat_map(|b| [b.present, b.permission, b.sick, b.absent])
        .max()
        .unwrap_or(0)
        .max(1)
}

pub fn bar_height_percent(value: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    value.saturating_mul(100) / max
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub relative: String,
}

/// Active schedules dated today or later, soonest first.
pub fn upcoming_items(schedules: &[Schedule], today: NaiveDate) -> Vec<UpcomingItem> {
    let mut upcoming: Vec<(NaiveDate, String, &Schedule)> = schedules
        .iter()
        .filter(|s| s.is_active)
        .filter_map(|s| {
            let date = schedule_date(&s.schedule_date)?;
            (date >= today).then(|| (date, extract_time(&s.start_time), s))
        })
        .collect();
    upcoming.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    upcoming
        .into_iter()
        .take(UPCOMING_LIMIT)
        .map(|(_, _, s)| {
            let mut description = schedule_time::short_date_label(&s.schedule_date);
            let range = schedule_time::time_range(&s.start_time, &s.end_time);
            if !range.is_empty() {
                description = format!("{} · {}", description, range);
            }
            if !s.room.trim().is_empty() {
                description = format!("{} · {}", description, s.room);
            }
            UpcomingItem {
                id: s.id.clone(),
                name: if s.subject.trim().is_empty() {
                    s.class_name.clone()
                } else {
                    format!("{} - {}", s.class_name, s.subject)
                },
                description,
                relative: schedule_time::relative_day_label(&s.schedule_date, today),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub name: String,
    pub time: String,
    pub status: String,
    pub schedule: String,
}

/// Attendance-related audit entries with their time on the local clock.
pub fn activity_entries(
    logs: &[AuditLog],
    to_local: impl Fn(DateTime<Utc>) -> NaiveDateTime,
) -> Vec<ActivityEntry> {
    logs.iter()
        .filter(|log| {
            log.action
                .as_deref()
                .map(|a| a.to_lowercase().contains("attendance"))
                .unwrap_or(false)
        })
        .take(ACTIVITY_LIMIT)
        .map(|log| ActivityEntry {
            id: log.id.clone(),
            name: log
                .user
                .as_ref()
                .and_then(|u| u.username.clone())
                .unwrap_or_else(|| "-".to_string()),
            time: log
                .created_at
                .as_deref()
                .and_then(parse_instant)
                .map(|at| to_local(at).format("%H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: log.status.clone().unwrap_or_else(|| "-".to_string()),
            schedule: log.schedule_id.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}
