use leptos::*;

use crate::{
    api::{Role, User, UserPayload},
    utils::validation::{looks_like_email, FieldErrors},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    /// `None` is "all roles".
    pub role: Option<Role>,
    pub status: StatusFilter,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let term = self.search.trim().to_lowercase();
        let text_match = term.is_empty()
            || [&user.username, &user.full_name, &user.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
        let role_match = self.role.map_or(true, |role| user.role == role);
        let status_match = match self.status {
            StatusFilter::All => true,
            StatusFilter::Active => user.is_active,
            StatusFilter::Inactive => !user.is_active,
        };
        text_match && role_match && status_match
    }
}

pub fn filter_users(users: &[User], filter: &UserFilter) -> Vec<User> {
    users.iter().filter(|u| filter.matches(u)).cloned().collect()
}

pub fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "bg-purple-100 text-purple-800",
        Role::MainTeam => "bg-blue-100 text-blue-800",
        Role::Cadet => "bg-amber-100 text-amber-800",
        Role::Member => "bg-green-100 text-green-800",
        Role::Unknown => "bg-gray-100 text-gray-700",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub rfid_card: String,
    pub password: String,
    pub role: Role,
    pub is_active: bool,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            full_name: String::new(),
            email: String::new(),
            rfid_card: String::new(),
            password: String::new(),
            role: Role::Member,
            is_active: true,
        }
    }
}

impl UserDraft {
    /// The password is never echoed back; it stays blank when editing.
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            rfid_card: user.rfid_card.clone().unwrap_or_default(),
            password: String::new(),
            role: user.role,
            is_active: user.is_active,
        }
    }
}

/// `creating` makes the password mandatory; on update a blank password is
/// left out of the payload so the stored one is kept.
pub fn validate_user(draft: &UserDraft, creating: bool) -> Result<UserPayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    if draft.username.trim().is_empty() {
        errors.insert("username", "Username is required");
    }
    if draft.full_name.trim().is_empty() {
        errors.insert("fullName", "Full name is required");
    }
    if draft.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !looks_like_email(&draft.email) {
        errors.insert("email", "Email is invalid");
    }
    if draft.rfid_card.trim().is_empty() {
        errors.insert("rfidCard", "RFID Card is required");
    }
    if creating && draft.password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors.into_result()?;

    Ok(UserPayload {
        username: draft.username.trim().to_string(),
        full_name: draft.full_name.trim().to_string(),
        email: draft.email.trim().to_string(),
        rfid_card: draft.rfid_card.trim().to_string(),
        password: (!draft.password.is_empty()).then(|| draft.password.clone()),
        role: draft.role,
        is_active: draft.is_active,
    })
}

#[derive(Clone, Copy)]
pub struct UserFormState {
    pub draft: RwSignal<UserDraft>,
    pub field_errors: RwSignal<FieldErrors>,
    pub editing_id: RwSignal<Option<String>>,
}

impl UserFormState {
    pub fn new() -> Self {
        Self {
            draft: create_rw_signal(UserDraft::default()),
            field_errors: create_rw_signal(FieldErrors::new()),
            editing_id: create_rw_signal(None),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.with_untracked(|id| id.is_some())
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn update(&self, field: &'static str, apply: impl FnOnce(&mut UserDraft)) {
        self.draft.update(apply);
        self.field_errors.update(|e| e.clear_field(field));
    }

    pub fn reset(&self, draft: UserDraft, editing_id: Option<String>) {
        self.draft.set(draft);
        self.editing_id.set(editing_id);
        self.field_errors.set(FieldErrors::new());
    }
}

impl Default for UserFormState {
    fn default() -> Self {
        Self::new()
    }
}
