use chrono::{Datelike, NaiveDate, Weekday};
use leptos::*;

use crate::{
    api::{Schedule, SchedulePayload},
    utils::{
        schedule_time::{self, date_input_value, date_to_iso, extract_time, parse_clock, schedule_date, time_to_iso},
        validation::FieldErrors,
    },
};

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn parse_weekday(value: &str) -> Option<Weekday> {
    WEEKDAYS.into_iter().find(|d| weekday_name(*d) == value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl ActiveFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ActiveFilter::All => "all",
            ActiveFilter::Active => "true",
            ActiveFilter::Inactive => "false",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "true" => ActiveFilter::Active,
            "false" => ActiveFilter::Inactive,
            _ => ActiveFilter::All,
        }
    }

    fn matches(self, is_active: bool) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Active => is_active,
            ActiveFilter::Inactive => !is_active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleFilter {
    pub search: String,
    pub weekday: Option<Weekday>,
    pub active: ActiveFilter,
}

impl ScheduleFilter {
    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || self.weekday.is_some() || self.active != ActiveFilter::All
    }

    pub fn matches(&self, schedule: &Schedule) -> bool {
        let term = self.search.trim().to_lowercase();
        let text_match = term.is_empty()
            || [&schedule.class_name, &schedule.subject, &schedule.instructor, &schedule.room]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
        let day_match = match self.weekday {
            None => true,
            Some(day) => schedule_date(&schedule.schedule_date).map(|d| d.weekday()) == Some(day),
        };
        text_match && day_match && self.active.matches(schedule.is_active)
    }
}

pub fn apply_filter(schedules: &[Schedule], filter: &ScheduleFilter) -> Vec<Schedule> {
    schedules.iter().filter(|s| filter.matches(s)).cloned().collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub total: usize,
    pub active: usize,
    pub today: usize,
}

/// `today` counts active schedules dated on the given day.
pub fn summarize(schedules: &[Schedule], today: NaiveDate) -> ScheduleSummary {
    ScheduleSummary {
        total: schedules.len(),
        active: schedules.iter().filter(|s| s.is_active).count(),
        today: schedules
            .iter()
            .filter(|s| s.is_active && schedule_date(&s.schedule_date) == Some(today))
            .count(),
    }
}

pub fn showing_label(shown: usize, total: usize, filtered: bool) -> String {
    let mut label = format!("Showing {} of {} schedules", shown, total);
    if filtered {
        label.push_str(" (filtered)");
    }
    label
}

/// Raw form input; times are `HH:MM`, the date `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDraft {
    pub class_name: String,
    pub subject: String,
    pub instructor: String,
    pub room: String,
    pub schedule_date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
}

impl ScheduleDraft {
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            class_name: String::new(),
            subject: String::new(),
            instructor: String::new(),
            room: String::new(),
            schedule_date: today.format("%Y-%m-%d").to_string(),
            start_time: String::new(),
            end_time: String::new(),
            is_active: true,
        }
    }

    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            class_name: schedule.class_name.clone(),
            subject: schedule.subject.clone(),
            instructor: schedule.instructor.clone(),
            room: schedule.room.clone(),
            schedule_date: date_input_value(&schedule.schedule_date),
            start_time: extract_time(&schedule.start_time),
            end_time: extract_time(&schedule.end_time),
            is_active: schedule.is_active,
        }
    }
}

pub fn validate_schedule(draft: &ScheduleDraft) -> Result<SchedulePayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    let required = [
        ("className", &draft.class_name, "Class name is required"),
        ("subject", &draft.subject, "Subject is required"),
        ("instructor", &draft.instructor, "Instructor is required"),
        ("room", &draft.room, "Room is required"),
        ("scheduleDate", &draft.schedule_date, "Schedule date is required"),
        ("startTime", &draft.start_time, "Start time is required"),
        ("endTime", &draft.end_time, "End time is required"),
    ];
    for (field, value, message) in required {
        if value.trim().is_empty() {
            errors.insert(field, message);
        }
    }
    if let (Some(start), Some(end)) = (parse_clock(&draft.start_time), parse_clock(&draft.end_time)) {
        if end <= start {
            errors.insert("endTime", "End time must be after start time");
        }
    }
    errors.into_result()?;

    let (Some(schedule_date), Some(start_time), Some(end_time)) = (
        date_to_iso(&draft.schedule_date),
        time_to_iso(&draft.start_time),
        time_to_iso(&draft.end_time),
    ) else {
        let mut errors = FieldErrors::new();
        errors.insert("submit", "Invalid date or time format");
        return Err(errors);
    };

    Ok(SchedulePayload {
        class_name: draft.class_name.trim().to_string(),
        subject: draft.subject.trim().to_string(),
        instructor: draft.instructor.trim().to_string(),
        room: draft.room.trim().to_string(),
        schedule_date,
        start_time,
        end_time,
        is_active: draft.is_active,
    })
}

#[derive(Clone, Copy)]
pub struct ScheduleFormState {
    pub draft: RwSignal<ScheduleDraft>,
    pub field_errors: RwSignal<FieldErrors>,
    pub editing_id: RwSignal<Option<String>>,
}

impl ScheduleFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: create_rw_signal(ScheduleDraft::empty(today)),
            field_errors: create_rw_signal(FieldErrors::new()),
            editing_id: create_rw_signal(None),
        }
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn update(&self, field: &'static str, apply: impl FnOnce(&mut ScheduleDraft)) {
        self.draft.update(apply);
        self.field_errors.update(|e| {
            e.clear_field(field);
            e.clear_field("submit");
        });
    }

    pub fn reset(&self, draft: ScheduleDraft, editing_id: Option<String>) {
        self.draft.set(draft);
        self.editing_id.set(editing_id);
        self.field_errors.set(FieldErrors::new());
    }
}

pub fn card_details(schedule: &Schedule) -> (String, String, String, i64) {
    (
        schedule_time::day_name(&schedule.schedule_date),
        schedule_time::short_date_label(&schedule.schedule_date),
        schedule_time::time_range(&schedule.start_time, &schedule.end_time),
        schedule_time::duration_minutes(&schedule.start_time, &schedule.end_time),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::schedule;

    fn draft() -> ScheduleDraft {
        ScheduleDraft {
            class_name: " TI-3A ".into(),
            subject: "Networks".into(),
            instructor: "Dr. Rahman".into(),
            room: "Lab 2".into(),
            schedule_date: "2025-03-05".into(),
            start_time: "08:00".into(),
            end_time: "09:40".into(),
            is_active: true,
        }
    }

    #[test]
    fn valid_draft_builds_iso_payload() {
        let payload = validate_schedule(&draft()).unwrap();
        assert_eq!(payload.class_name, "TI-3A");
        assert_eq!(payload.schedule_date, "2025-03-05T00:00:00.000Z");
        assert_eq!(payload.start_time, "2000-01-01T08:00:00.000Z");
        assert_eq!(payload.end_time, "2000-01-01T09:40:00.000Z");
    }

    #[test]
    fn end_must_follow_start() {
        let mut d = draft();
        d.end_time = "08:00".into();
        let errors = validate_schedule(&d).unwrap_err();
        assert_eq!(errors.get("endTime"), Some("End time must be after start time"));
    }

    #[test]
    fn blank_fields_are_reported_individually() {
        let mut d = draft();
        d.room = "  ".into();
        d.start_time.clear();
        let errors = validate_schedule(&d).unwrap_err();
        assert_eq!(errors.get("room"), Some("Room is required"));
        assert_eq!(errors.get("startTime"), Some("Start time is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn draft_from_schedule_reads_literal_times() {
        let s = schedule("1", "2025-03-05T00:00:00.000Z", "2000-01-01T13:15:00.000Z", "2000-01-01T15:00:00.000Z");
        let d = ScheduleDraft::from_schedule(&s);
        assert_eq!(d.schedule_date, "2025-03-05");
        assert_eq!(d.start_time, "13:15");
        assert_eq!(d.end_time, "15:00");
    }

    #[test]
    fn filter_combines_text_weekday_and_active() {
        let mut a = schedule("a", "2025-03-03T00:00:00.000Z", "", "");
        a.room = "Lab Jaringan".into();
        let mut b = schedule("b", "2025-03-04T00:00:00.000Z", "", "");
        b.is_active = false;
        let all = vec![a, b];

        let only = |f: ScheduleFilter| apply_filter(&all, &f).into_iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(only(ScheduleFilter::default()), vec!["a", "b"]);
        assert_eq!(
            only(ScheduleFilter { search: "jaringan".into(), ..Default::default() }),
            vec!["a"]
        );
        assert_eq!(
            only(ScheduleFilter { weekday: Some(Weekday::Tue), ..Default::default() }),
            vec!["b"]
        );
        assert_eq!(
            only(ScheduleFilter { active: ActiveFilter::Active, ..Default::default() }),
            vec!["a"]
        );
    }

    #[test]
    fn summary_and_showing_label() {
        let mut inactive = schedule("c", "2025-03-03T00:00:00.000Z", "", "");
        inactive.is_active = false;
        let all = vec![
            schedule("a", "2025-03-03T00:00:00.000Z", "", ""),
            schedule("b", "2025-03-04T00:00:00.000Z", "", ""),
            inactive,
        ];
        let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(summarize(&all, today), ScheduleSummary { total: 3, active: 2, today: 1 });
        assert_eq!(showing_label(1, 3, true), "Showing 1 of 3 schedules (filtered)");
        assert_eq!(showing_label(3, 3, false), "Showing 3 of 3 schedules");
    }
}
