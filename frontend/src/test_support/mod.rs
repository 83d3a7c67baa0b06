#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, Schedule, SessionUser};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> SessionUser {
        SessionUser {
            id: Some("u-admin".into()),
            username: "admin".into(),
            full_name: Some("Campus Admin".into()),
            email: Some("admin@campus.test".into()),
            role: Some(Role::Admin),
        }
    }

    pub fn regular_user() -> SessionUser {
        SessionUser {
            id: Some("u-member".into()),
            username: "member".into(),
            full_name: Some("Regular Member".into()),
            email: Some("member@campus.test".into()),
            role: Some(Role::Member),
        }
    }

    pub fn provide_auth(user: Option<SessionUser>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated: true,
            loading: false,
            expired: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn schedule(id: &str, date: &str, start: &str, end: &str) -> Schedule {
        Schedule {
            id: id.into(),
            class_name: format!("Class {}", id),
            subject: "Embedded Systems".into(),
            instructor: "Dr. Rahman".into(),
            room: "R-201".into(),
            schedule_date: date.into(),
            start_time: start.into(),
            end_time: end.into(),
            is_active: true,
        }
    }
}
