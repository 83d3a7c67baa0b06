use leptos::*;
use uuid::Uuid;

use crate::api::ApiError;

pub const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide notification queue. Every user-visible error that is not a
/// field-level validation message ends up here.
#[derive(Clone, Copy)]
pub struct ToastContext {
    pub toasts: RwSignal<Vec<Toast>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));
        self.schedule_dismiss(id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message)
    }

    /// Server message when the backend supplied one, `fallback` otherwise.
    pub fn api_error(&self, err: &ApiError, fallback: &str) -> Uuid {
        self.error(err.user_message(fallback))
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let ctx = *self;
        gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || ctx.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(provide_toasts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let runtime = create_runtime();
        let toasts = use_toast();
        let first = toasts.success("User assigned to schedule");
        toasts.error("Failed to assign user");
        assert_eq!(toasts.toasts.get().len(), 2);
        toasts.dismiss(first);
        let remaining = toasts.toasts.get();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind, ToastKind::Error);
        runtime.dispose();
    }

    #[test]
    fn api_error_uses_fallback_for_transport_failures() {
        let runtime = create_runtime();
        let toasts = use_toast();
        toasts.api_error(&ApiError::request_failed("Request failed: timeout"), "Failed to delete attendance");
        toasts.api_error(&ApiError::app("Already deleted"), "Failed to delete attendance");
        let messages: Vec<String> = toasts.toasts.get().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["Failed to delete attendance", "Already deleted"]);
        runtime.dispose();
    }

    #[test]
    fn use_toast_shares_provided_context() {
        let runtime = create_runtime();
        let provided = provide_toasts();
        use_toast().success("Users refreshed");
        assert_eq!(provided.toasts.get().len(), 1);
        runtime.dispose();
    }
}
