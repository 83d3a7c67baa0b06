use crate::state::auth::{self, use_auth};
use leptos::*;

pub const SESSION_EXPIRED_TITLE: &str = "Session Expired";
pub const SESSION_EXPIRED_MESSAGE: &str =
    "Your login session has ended. Please log in again to continue.";

/// Modal with no backdrop or Escape dismissal; Logout is the only way out.
#[component]
pub fn SessionExpiredDialog() -> impl IntoView {
    let (auth, _) = use_auth();
    let is_open = create_memo(move |_| auth.get().expired);
    let logout_action = auth::use_logout_action();
    let pending = logout_action.pending();

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[80] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-black/50"></div>
                <div
                    class="relative z-[81] w-full max-w-md rounded-lg bg-white shadow-xl p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-gray-900">{SESSION_EXPIRED_TITLE}</h2>
                    <p class="text-sm text-gray-600">{SESSION_EXPIRED_MESSAGE}</p>
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-orange-500 text-white hover:bg-orange-600 disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| logout_action.dispatch(())
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
