use crate::{
    api::{
        ApiClient, ApiError, AttendanceRecord, AttendanceRoster, AttendanceStatus, AttendanceUpdate,
        AvailableUser, LastScan, RosterRow, Schedule,
    },
    pages::attendance::{
        repository::AttendanceRepository,
        utils::{date_input_today, debounce, manual_request, EditDraft},
    },
    state::toast::{use_toast, ToastContext},
    utils::{
        generation::Generation,
        schedule_time::{self, SessionStatus},
        time,
    },
};
use chrono::{DateTime, Utc};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub schedules_resource: Resource<(), Result<Vec<Schedule>, ApiError>>,
    pub schedule_search: RwSignal<String>,
    pub selected_schedule: RwSignal<Option<String>>,
    pub selected_date: RwSignal<String>,
    pub roster: RwSignal<Option<AttendanceRoster>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub last_scan: RwSignal<Option<LastScan>>,
    pub edit: RwSignal<Option<EditDraft>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub manual_target: RwSignal<Option<RosterRow>>,
    pub assign_open: RwSignal<bool>,
    pub assign_search: RwSignal<String>,
    pub candidates: RwSignal<Vec<AvailableUser>>,
    pub candidates_loading: RwSignal<bool>,
    pub now: RwSignal<DateTime<Utc>>,
    toast: ToastContext,
    repository: StoredValue<AttendanceRepository>,
    roster_generation: StoredValue<Generation>,
    search_generation: StoredValue<Generation>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_repository(AttendanceRepository::new_with_client(Rc::new(api)))
    }

    pub fn new_with_repository(repository: AttendanceRepository) -> Self {
        let repo = repository.clone();
        let schedules_resource = create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                async move { repo.fetch_schedules().await }
            },
        );

        Self {
            schedules_resource,
            schedule_search: create_rw_signal(String::new()),
            selected_schedule: create_rw_signal(None),
            selected_date: create_rw_signal(date_input_today(time::today_local())),
            roster: create_rw_signal(None),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            last_scan: create_rw_signal(None),
            edit: create_rw_signal(None),
            pending_delete: create_rw_signal(None),
            manual_target: create_rw_signal(None),
            assign_open: create_rw_signal(false),
            assign_search: create_rw_signal(String::new()),
            candidates: create_rw_signal(Vec::new()),
            candidates_loading: create_rw_signal(false),
            now: create_rw_signal(time::now_utc()),
            toast: use_toast(),
            repository: store_value(repository),
            roster_generation: store_value(Generation::new()),
            search_generation: store_value(Generation::new()),
        }
    }

    fn api_date(&self) -> String {
        schedule_time::api_date(&self.selected_date.get_untracked(), time::today_local())
    }

    /// Session badge for the loaded schedule, against the ticking clock.
    pub fn session_status(&self) -> Option<SessionStatus> {
        let now = self.now.get();
        self.roster.with(|roster| {
            let schedule = roster.as_ref()?.schedule.as_ref()?;
            schedule_time::session_status(&schedule.start_time, &schedule.end_time, now)
        })
    }

    pub fn tick(&self) {
        self.now.set(time::now_utc());
    }

    pub fn select_schedule(&self, schedule_id: String) {
        self.selected_schedule.set(Some(schedule_id));
        self.roster.set(None);
        self.last_scan.set(None);
        self.edit.set(None);
        self.refresh();
    }

    pub fn select_date(&self, value: String) {
        self.selected_date.set(value);
        self.refresh();
    }

    pub fn refresh(&self) {
        let vm = *self;
        spawn_local(async move { vm.load_roster().await });
    }

    /// Roster for the selected schedule and date, then the latest scan.
    /// A response that was overtaken by a newer load is dropped.
    pub async fn load_roster(&self) {
        let Some(schedule_id) = self.selected_schedule.get_untracked() else {
            return;
        };
        let ticket = self.roster_generation.with_value(|g| g.begin());
        let is_current = move |vm: &Self| vm.roster_generation.with_value(|g| g.is_current(ticket));
        let repository = self.repository.get_value();
        let date = self.api_date();

        self.loading.set(true);
        self.error.set(None);

        let roster = repository.fetch_roster(&schedule_id, &date).await;
        if !is_current(self) {
            log::debug!("dropping superseded roster for schedule {}", schedule_id);
            return;
        }
        match roster {
            Ok(roster) => self.roster.set(Some(roster)),
            Err(err) => {
                let message = err.user_message("Failed to fetch attendance data");
                self.error.set(Some(message.clone()));
                self.toast.error(message);
            }
        }

        let last = repository.fetch_last_attendance(&schedule_id).await;
        if !is_current(self) {
            return;
        }
        match last {
            Ok(last) => self.last_scan.set(last.latest().cloned()),
            Err(err) => {
                log::warn!("last attendance unavailable for {}: {}", schedule_id, err);
                self.last_scan.set(None);
            }
        }
        self.loading.set(false);
    }

    async fn finish_mutation(&self, result: Result<(), ApiError>, success: &str, fallback: &str) -> bool {
        match result {
            Ok(()) => {
                self.toast.success(success);
                self.load_roster().await;
                true
            }
            Err(err) => {
                log::warn!("{}: {}", fallback, err);
                self.toast.api_error(&err, fallback);
                false
            }
        }
    }

    pub fn begin_edit(&self, record: &AttendanceRecord) {
        self.edit.set(Some(EditDraft::from_record(record)));
    }

    pub fn cancel_edit(&self) {
        self.edit.set(None);
    }

    pub async fn save_edit(&self) {
        let Some(draft) = self.edit.get_untracked() else {
            return;
        };
        let update = AttendanceUpdate::new(draft.status, draft.notes.clone());
        let result = self
            .repository
            .get_value()
            .update_attendance(&draft.attendance_id, &update)
            .await;
        self.edit.set(None);
        self.finish_mutation(result, "Attendance updated successfully", "Failed to update attendance")
            .await;
    }

    pub fn request_delete(&self, attendance_id: String) {
        self.pending_delete.set(Some(attendance_id));
    }

    pub async fn confirm_delete(&self) {
        let Some(id) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        let result = self.repository.get_value().delete_attendance(&id).await;
        self.finish_mutation(result, "Attendance deleted successfully", "Failed to delete attendance")
            .await;
    }

    pub async fn create_manual(&self, status: AttendanceStatus, notes: String) {
        let (Some(row), Some(schedule_id)) = (
            self.manual_target.get_untracked(),
            self.selected_schedule.get_untracked(),
        ) else {
            return;
        };
        let date = self.selected_date.get_untracked();
        let request = manual_request(
            &row.user_id,
            &schedule_id,
            status,
            &notes,
            Some(date.as_str()).filter(|d| !d.trim().is_empty()),
            time::now_utc(),
        );
        let result = self.repository.get_value().create_manual(&request).await;
        if self
            .finish_mutation(result, "Manual attendance created", "Failed to create manual attendance")
            .await
        {
            self.manual_target.set(None);
        }
    }

    pub fn open_assign(&self) {
        self.assign_open.set(true);
        self.assign_search.set(String::new());
        self.search_candidates_later(String::new());
    }

    pub fn close_assign(&self) {
        self.assign_open.set(false);
        self.search_generation.with_value(|g| g.begin());
        self.candidates.set(Vec::new());
        self.candidates_loading.set(false);
    }

    pub fn search_candidates_later(&self, term: String) {
        let vm = *self;
        spawn_local(async move { vm.search_candidates(term).await });
    }

    /// Debounced lookup; only the latest keystroke's response lands.
    pub async fn search_candidates(&self, term: String) {
        let Some(schedule_id) = self.selected_schedule.get_untracked() else {
            return;
        };
        let ticket = self.search_generation.with_value(|g| g.begin());
        debounce().await;
        if !self.search_generation.with_value(|g| g.is_current(ticket)) {
            return;
        }
        self.candidates_loading.set(true);
        let result = self
            .repository
            .get_value()
            .search_available_users(&schedule_id, &term)
            .await;
        if !self.search_generation.with_value(|g| g.is_current(ticket)) {
            return;
        }
        match result {
            Ok(users) => self.candidates.set(users),
            Err(err) => {
                self.candidates.set(Vec::new());
                self.toast.api_error(&err, "Failed to load available users");
            }
        }
        self.candidates_loading.set(false);
    }

    pub async fn assign(&self, user_id: String) {
        let Some(schedule_id) = self.selected_schedule.get_untracked() else {
            return;
        };
        let result = self.repository.get_value().assign_user(&user_id, &schedule_id).await;
        if self
            .finish_mutation(result, "User assigned to schedule", "Failed to assign user")
            .await
        {
            self.close_assign();
        }
    }

    pub async fn remove_assignment(&self, user_id: String) {
        let Some(schedule_id) = self.selected_schedule.get_untracked() else {
            return;
        };
        let result = self
            .repository
            .get_value()
            .remove_assignment(&schedule_id, &user_id)
            .await;
        self.finish_mutation(result, "Assignment removed", "Failed to remove assignment")
            .await;
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
