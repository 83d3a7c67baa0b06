use leptos::*;

/// Field-level message under an input.
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(|e| e.is_some()) fallback=|| ()>
            <p class="mt-1 text-xs text-red-600">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Form-level failure shown above the submit button.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(|e| e.is_some()) fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded my-2 text-sm">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
