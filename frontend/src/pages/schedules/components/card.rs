use crate::{
    api::Schedule,
    pages::schedules::{utils::card_details, view_model::ScheduleViewModel},
    utils::{schedule_time, time},
};
use leptos::*;

#[component]
pub fn ScheduleCard(vm: ScheduleViewModel, schedule: Schedule) -> impl IntoView {
    let (day, date, range, minutes) = card_details(&schedule);
    let status = schedule_time::schedule_status(
        &schedule.schedule_date,
        &schedule.start_time,
        &schedule.end_time,
        time::now_local(),
    );
    let active_class = if schedule.is_active {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-700"
    };
    let edit_target = schedule.clone();
    let delete_target = schedule.clone();

    view! {
        <div class="bg-white shadow rounded-lg p-4 space-y-3">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <h3 class="text-base font-semibold text-gray-900">{schedule.class_name.clone()}</h3>
                    <p class="text-sm text-gray-600">{schedule.subject.clone()}</p>
                </div>
                <div class="flex flex-col items-end gap-1">
                    <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", status.badge_class())>
                        {status.label()}
                    </span>
                    <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", active_class)>
                        {if schedule.is_active { "Active" } else { "Inactive" }}
                    </span>
                </div>
            </div>
            <dl class="grid grid-cols-2 gap-2 text-sm">
                <dt class="text-gray-500">"Day"</dt>
                <dd class="text-gray-900">{day}</dd>
                <dt class="text-gray-500">"Date"</dt>
                <dd class="text-gray-900">{date}</dd>
                <dt class="text-gray-500">"Time"</dt>
                <dd class="text-gray-900">{range}" ("{minutes}" min)"</dd>
                <dt class="text-gray-500">"Instructor"</dt>
                <dd class="text-gray-900">{schedule.instructor.clone()}</dd>
                <dt class="text-gray-500">"Room"</dt>
                <dd class="text-gray-900">{schedule.room.clone()}</dd>
            </dl>
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class="px-3 py-1 text-sm rounded border border-gray-300 hover:bg-gray-50"
                    on:click=move |_| vm.open_edit(&edit_target)
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="px-3 py-1 text-sm rounded bg-red-600 text-white hover:bg-red-700"
                    on:click=move |_| vm.pending_delete.set(Some(delete_target.clone()))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
