use crate::{
    api::Schedule,
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::attendance::{
        utils::{filter_schedules, schedule_title},
        view_model::AttendanceViewModel,
    },
    utils::{schedule_time, time},
};
use leptos::*;

#[component]
pub fn SchedulePicker(vm: AttendanceViewModel) -> impl IntoView {
    let visible = move || {
        vm.schedules_resource.get().map(|result| {
            result.map(|schedules| filter_schedules(&schedules, &vm.schedule_search.get()))
        })
    };

    view! {
        <div class="bg-white shadow rounded-lg p-4 space-y-3">
            <div class="flex items-center justify-between">
                <h2 class="text-base font-semibold text-gray-900">"Schedules"</h2>
                <button
                    type="button"
                    class="text-sm text-orange-600 hover:underline"
                    on:click=move |_| vm.schedules_resource.refetch()
                >
                    "Reload"
                </button>
            </div>
            <input
                type="search"
                placeholder="Search class, subject, instructor or date"
                class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                prop:value=move || vm.schedule_search.get()
                on:input=move |ev| vm.schedule_search.set(event_target_value(&ev))
            />
            {move || match visible() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! {
                    <ErrorMessage message=err.user_message("Failed to load schedules") />
                }
                .into_view(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <p class="text-sm text-gray-500">"No schedules match your search."</p>
                }
                .into_view(),
                Some(Ok(list)) => view! {
                    <ul class="max-h-96 overflow-y-auto divide-y divide-gray-100">
                        {list.into_iter().map(|schedule| view! { <ScheduleOption vm=vm schedule=schedule /> }).collect_view()}
                    </ul>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn ScheduleOption(vm: AttendanceViewModel, schedule: Schedule) -> impl IntoView {
    let status = schedule_time::schedule_status(
        &schedule.schedule_date,
        &schedule.start_time,
        &schedule.end_time,
        time::now_local(),
    );
    let id = schedule.id.clone();
    let selected = {
        let id = id.clone();
        move || vm.selected_schedule.with(|current| current.as_deref() == Some(id.as_str()))
    };
    let class = move || {
        if selected() {
            "w-full text-left px-3 py-2 rounded-md bg-orange-50 border border-orange-200"
        } else {
            "w-full text-left px-3 py-2 rounded-md hover:bg-gray-50"
        }
    };

    view! {
        <li class="py-1">
            <button type="button" class=class on:click=move |_| vm.select_schedule(id.clone())>
                <div class="flex items-center justify-between gap-2">
                    <span class="text-sm font-medium text-gray-900">{schedule_title(&schedule)}</span>
                    <span class=format!("px-2 py-0.5 rounded-full text-xs {}", status.badge_class())>
                        {status.label()}
                    </span>
                </div>
                <p class="text-xs text-gray-500">
                    {schedule_time::short_date_label(&schedule.schedule_date)}
                    " · "
                    {schedule_time::time_range(&schedule.start_time, &schedule.end_time)}
                </p>
            </button>
        </li>
    }
}
