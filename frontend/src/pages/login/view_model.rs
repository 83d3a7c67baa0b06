use super::utils::{validate_credentials, LoginFormState};
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Runs field validation first; nothing is sent while any field fails.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(errors) = validate_credentials(&email, &password) {
            self.form.field_errors.set(errors);
            return;
        }
        self.form.field_errors.set(Default::default());
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
    }
}

pub fn login_error_message(err: &ApiError) -> String {
    err.user_message("Login failed.")
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.password.set(String::new());
                    navigation::redirect("/dashboard");
                }
                Err(err) => error.set(Some(login_error_message(&err))),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
