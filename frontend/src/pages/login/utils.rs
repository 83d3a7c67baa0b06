use crate::utils::validation::{looks_like_email, FieldErrors};
use leptos::*;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !looks_like_email(email) {
        errors.insert("email", "Please enter a valid email address");
    }
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters long");
    }
    errors.into_result()
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub field_errors: RwSignal<FieldErrors>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            field_errors: create_rw_signal(FieldErrors::new()),
        }
    }
}

impl LoginFormState {
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Typing into a field drops its stale message.
    pub fn clear_error(&self, field: &'static str) {
        self.field_errors.update(|e| e.clear_field(field));
    }
}
