use crate::{
    api::{ApiClient, ApiError, Schedule},
    pages::schedules::{
        repository::ScheduleRepository,
        utils::{validate_schedule, ScheduleDraft, ScheduleFilter, ScheduleFormState},
    },
    state::toast::{use_toast, ToastContext},
    utils::{generation::Generation, time},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ScheduleViewModel {
    pub schedules: RwSignal<Vec<Schedule>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub filter: RwSignal<ScheduleFilter>,
    pub form: ScheduleFormState,
    pub form_open: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<Schedule>>,
    toast: ToastContext,
    repository: StoredValue<ScheduleRepository>,
    generation: StoredValue<Generation>,
}

impl ScheduleViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_repository(ScheduleRepository::new_with_client(Rc::new(api)))
    }

    pub fn new_with_repository(repository: ScheduleRepository) -> Self {
        Self {
            schedules: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            filter: create_rw_signal(ScheduleFilter::default()),
            form: ScheduleFormState::new(time::today_local()),
            form_open: create_rw_signal(false),
            submitting: create_rw_signal(false),
            pending_delete: create_rw_signal(None),
            toast: use_toast(),
            repository: store_value(repository),
            generation: store_value(Generation::new()),
        }
    }

    pub fn refresh(&self) {
        let vm = *self;
        spawn_local(async move { vm.load().await });
    }

    pub async fn load(&self) {
        let ticket = self.generation.with_value(|g| g.begin());
        self.loading.set(true);
        self.error.set(None);
        let result = self.repository.get_value().list().await;
        if !self.generation.with_value(|g| g.is_current(ticket)) {
            return;
        }
        match result {
            Ok(list) => self.schedules.set(list),
            Err(err) => self.error.set(Some(err.user_message("Failed to load schedules"))),
        }
        self.loading.set(false);
    }

    pub fn open_create(&self) {
        self.form.reset(ScheduleDraft::empty(time::today_local()), None);
        self.form_open.set(true);
    }

    pub fn open_edit(&self, schedule: &Schedule) {
        self.form
            .reset(ScheduleDraft::from_schedule(schedule), Some(schedule.id.clone()));
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.form.editing_id.set(None);
    }

    pub fn clear_filters(&self) {
        self.filter.set(ScheduleFilter::default());
    }

    /// Validates locally first; nothing is sent while a field is invalid.
    pub async fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let payload = match validate_schedule(&self.form.draft.get_untracked()) {
            Ok(payload) => payload,
            Err(errors) => {
                self.form.field_errors.set(errors);
                return;
            }
        };
        let editing = self.form.editing_id.get_untracked();
        self.submitting.set(true);
        let result = self
            .repository
            .get_value()
            .save(editing.as_deref(), &payload)
            .await;
        self.submitting.set(false);

        let fallback = if editing.is_some() {
            "Failed to update schedule"
        } else {
            "Failed to create schedule"
        };
        match result {
            Ok(message) => {
                let default = if editing.is_some() {
                    "Schedule updated successfully"
                } else {
                    "Schedule created successfully"
                };
                self.toast.success(message.unwrap_or_else(|| default.to_string()));
                self.close_form();
                self.load().await;
            }
            Err(err) => self.report(&err, fallback),
        }
    }

    pub async fn confirm_delete(&self) {
        let Some(schedule) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        match self.repository.get_value().delete(&schedule.id).await {
            Ok(message) => {
                self.toast
                    .success(message.unwrap_or_else(|| "Schedule deleted successfully".to_string()));
                self.load().await;
            }
            Err(err) => self.report(&err, "Failed to delete schedule"),
        }
    }

    fn report(&self, err: &ApiError, fallback: &str) {
        log::warn!("{}: {}", fallback, err);
        self.toast.api_error(err, fallback);
    }
}

pub fn use_schedule_view_model() -> ScheduleViewModel {
    match use_context::<ScheduleViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ScheduleViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
