use crate::{
    api::{ApiClient, User},
    pages::users::{
        repository::UsersRepository,
        utils::{validate_user, UserDraft, UserFilter, UserFormState},
    },
    state::toast::{use_toast, ToastContext},
    utils::generation::Generation,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub users: RwSignal<Vec<User>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub filter: RwSignal<UserFilter>,
    pub form: UserFormState,
    pub form_open: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<User>>,
    toast: ToastContext,
    repository: StoredValue<UsersRepository>,
    generation: StoredValue<Generation>,
}

impl UsersViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_repository(UsersRepository::new_with_client(Rc::new(api)))
    }

    pub fn new_with_repository(repository: UsersRepository) -> Self {
        Self {
            users: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            filter: create_rw_signal(UserFilter::default()),
            form: UserFormState::new(),
            form_open: create_rw_signal(false),
            submitting: create_rw_signal(false),
            pending_delete: create_rw_signal(None),
            toast: use_toast(),
            repository: store_value(repository),
            generation: store_value(Generation::new()),
        }
    }

    /// Returns whether the list was replaced.
    pub async fn load(&self) -> bool {
        let ticket = self.generation.with_value(|g| g.begin());
        self.loading.set(true);
        let result = self.repository.get_value().fetch_users().await;
        if !self.generation.with_value(|g| g.is_current(ticket)) {
            return false;
        }
        self.loading.set(false);
        match result {
            Ok(users) => {
                self.users.set(users);
                self.error.set(None);
                true
            }
            Err(err) => {
                log::warn!("user list fetch failed: {}", err);
                let message = err.user_message("Failed to load users");
                self.error.set(Some(message.clone()));
                self.toast.error(message);
                false
            }
        }
    }

    pub fn load_later(&self) {
        let vm = *self;
        spawn_local(async move {
            vm.load().await;
        });
    }

    pub async fn refresh(&self) {
        if self.load().await {
            self.toast.success("Users refreshed");
        }
    }

    pub fn open_create(&self) {
        self.form.reset(UserDraft::default(), None);
        self.form_open.set(true);
    }

    pub fn open_edit(&self, user: &User) {
        self.form.reset(UserDraft::from_user(user), Some(user.id.clone()));
        self.form_open.set(true);
    }

    pub fn close_form(&self) {
        self.form_open.set(false);
        self.form.editing_id.set(None);
    }

    pub async fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let editing = self.form.editing_id.get_untracked();
        let payload = match validate_user(&self.form.draft.get_untracked(), editing.is_none()) {
            Ok(payload) => payload,
            Err(errors) => {
                self.form.field_errors.set(errors);
                return;
            }
        };

        self.submitting.set(true);
        let repository = self.repository.get_value();
        let result = match editing.as_deref() {
            Some(id) => repository.update_user(id, &payload).await,
            None => repository.create_user(&payload).await,
        };
        self.submitting.set(false);

        match (result, editing.is_some()) {
            (Ok(()), updated) => {
                self.toast.success(if updated {
                    "User updated successfully"
                } else {
                    "User created successfully"
                });
                self.close_form();
                self.load().await;
            }
            (Err(err), true) => {
                self.toast.api_error(&err, "Failed to update user");
            }
            (Err(err), false) => {
                self.toast.api_error(&err, "Failed to create user");
            }
        }
    }

    pub async fn confirm_delete(&self) {
        let Some(user) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        match self.repository.get_value().delete_user(&user.id).await {
            Ok(()) => {
                self.toast.success("User deleted successfully");
                self.load().await;
            }
            Err(err) => {
                self.toast.api_error(&err, "Failed to delete user");
            }
        }
    }
}

pub fn use_users_view_model() -> UsersViewModel {
    match use_context::<UsersViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = UsersViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
