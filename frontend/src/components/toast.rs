use crate::state::toast::{use_toast, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "flex items-start gap-3 rounded-md border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-800 shadow"
        }
        ToastKind::Error => {
            "flex items-start gap-3 rounded-md border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-800 shadow"
        }
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="fixed top-4 right-4 z-[90] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.kind) role="status">
                            <span class="flex-1">{toast.message}</span>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="opacity-60 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
