use crate::{
    components::error::{FieldError, InlineErrorMessage},
    pages::schedules::{utils::ScheduleDraft, view_model::ScheduleViewModel},
};
use leptos::*;

type Setter = fn(&mut ScheduleDraft, String);
type Getter = fn(&ScheduleDraft) -> String;

#[component]
fn TextField(
    vm: ScheduleViewModel,
    field: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    let form = vm.form;
    view! {
        <label class="block text-sm font-medium text-gray-700">
            {label}
            <input
                type=input_type
                class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                prop:value=move || form.draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(field, |d| set(d, value));
                }
            />
            <FieldError error=form.field_error(field) />
        </label>
    }
}

#[component]
pub fn ScheduleFormDialog(vm: ScheduleViewModel) -> impl IntoView {
    let form = vm.form;
    let editing = move || form.editing_id.with(|id| id.is_some());
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move { vm.submit().await });
    };

    view! {
        <Show when=move || vm.form_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| vm.close_form()
                ></button>
                <form
                    class="relative z-[61] w-full max-w-lg rounded-lg bg-white shadow-xl p-6 space-y-4"
                    role="dialog"
                    on:submit=submit
                >
                    <h2 class="text-lg font-semibold text-gray-900">
                        {move || if editing() { "Edit Schedule" } else { "New Schedule" }}
                    </h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <TextField vm=vm field="className" label="Class Name"
                            get=|d| d.class_name.clone() set=|d, v| d.class_name = v />
                        <TextField vm=vm field="subject" label="Subject"
                            get=|d| d.subject.clone() set=|d, v| d.subject = v />
                        <TextField vm=vm field="instructor" label="Instructor"
                            get=|d| d.instructor.clone() set=|d, v| d.instructor = v />
                        <TextField vm=vm field="room" label="Room"
                            get=|d| d.room.clone() set=|d, v| d.room = v />
                        <TextField vm=vm field="scheduleDate" label="Date" input_type="date"
                            get=|d| d.schedule_date.clone() set=|d, v| d.schedule_date = v />
                        <div></div>
                        <TextField vm=vm field="startTime" label="Start Time" input_type="time"
                            get=|d| d.start_time.clone() set=|d, v| d.start_time = v />
                        <TextField vm=vm field="endTime" label="End Time" input_type="time"
                            get=|d| d.end_time.clone() set=|d, v| d.end_time = v />
                    </div>
                    <label class="flex items-center gap-2 text-sm text-gray-700">
                        <input
                            type="checkbox"
                            prop:checked=move || form.draft.with(|d| d.is_active)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update("isActive", |d| d.is_active = checked);
                            }
                        />
                        "Active"
                    </label>
                    <InlineErrorMessage error=form.field_error("submit") />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-gray-100 text-gray-800 hover:bg-gray-200"
                            on:click=move |_| vm.close_form()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-orange-500 text-white hover:bg-orange-600 disabled:opacity-50"
                            disabled=move || vm.submitting.get()
                        >
                            {move || match (vm.submitting.get(), editing()) {
                                (true, _) => "Saving...",
                                (false, true) => "Update",
                                (false, false) => "Create",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
