use crate::{
    api::AttendanceStatus,
    pages::attendance::{utils::default_manual_notes, view_model::AttendanceViewModel},
};
use leptos::*;

#[component]
pub fn ManualAttendanceDialog(vm: AttendanceViewModel) -> impl IntoView {
    let status = create_rw_signal(AttendanceStatus::Present);
    let notes = create_rw_signal(String::new());
    let submitting = create_rw_signal(false);

    // Fresh form each time a row is picked.
    create_effect(move |_| {
        if vm.manual_target.with(|t| t.is_some()) {
            status.set(AttendanceStatus::Present);
            notes.set(String::new());
        }
    });

    let submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        let (status, notes) = (status.get_untracked(), notes.get_untracked());
        spawn_local(async move {
            vm.create_manual(status, notes).await;
            submitting.set(false);
        });
    };

    view! {
        <Show when=move || vm.manual_target.with(|t| t.is_some())>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| vm.manual_target.set(None)
                ></button>
                <div class="relative z-[61] w-full max-w-md rounded-lg bg-white shadow-xl p-6 space-y-4" role="dialog">
                    <h2 class="text-lg font-semibold text-gray-900">"Manual Attendance"</h2>
                    <p class="text-sm text-gray-600">
                        {move || vm.manual_target.with(|t| t.as_ref().map(|r| r.user_name.clone()).unwrap_or_default())}
                    </p>
                    <label class="block text-sm font-medium text-gray-700">
                        "Status"
                        <select
                            class="mt-1 block w-full border rounded px-2 py-1"
                            on:change=move |ev| {
                                if let Some(value) = AttendanceStatus::parse(&event_target_value(&ev)) {
                                    status.set(value);
                                }
                            }
                        >
                            {AttendanceStatus::ALL
                                .into_iter()
                                .map(|option| view! {
                                    <option value=option.as_str() selected=move || status.get() == option>
                                        {option.as_str()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="block text-sm font-medium text-gray-700">
                        "Notes"
                        <textarea
                            class="mt-1 block w-full border rounded px-2 py-1"
                            placeholder=move || default_manual_notes(status.get())
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-gray-100 text-gray-800 hover:bg-gray-200"
                            on:click=move |_| vm.manual_target.set(None)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-orange-500 text-white hover:bg-orange-600 disabled:opacity-50"
                            disabled=move || submitting.get()
                            on:click=submit
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
