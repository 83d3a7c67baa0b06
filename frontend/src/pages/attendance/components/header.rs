use crate::{
    pages::attendance::{
        utils::{instructor_label, last_scan_summary, schedule_title},
        view_model::AttendanceViewModel,
    },
    utils::schedule_time,
};
use leptos::*;

#[component]
pub fn AttendanceHeader(vm: AttendanceViewModel) -> impl IntoView {
    let schedule = move || vm.roster.with(|r| r.as_ref().and_then(|r| r.schedule.clone()));
    let stats = move || {
        vm.roster
            .with(|r| r.as_ref().and_then(|r| r.stats.clone()))
            .unwrap_or_default()
    };
    let last = move || vm.last_scan.with(|scan| last_scan_summary(scan.as_ref()));

    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col lg:flex-row lg:items-center lg:justify-between gap-4">
                <div class="space-y-1">
                    <div class="flex items-center gap-2">
                        <h2 class="text-2xl font-bold text-gray-900">"Attendance Data"</h2>
                        {move || vm.session_status().map(|status| view! {
                            <span class=format!("px-2 py-0.5 rounded-full border text-xs {}", status.badge_class())>
                                {status.label()}
                            </span>
                        })}
                    </div>
                    <p class="text-gray-600">{move || schedule().map(|s| schedule_title(&s)).unwrap_or_default()}</p>
                </div>
                <div class="flex gap-3">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg border border-orange-200 text-orange-700 hover:bg-orange-50 disabled:opacity-50"
                        disabled=move || vm.loading.get()
                        on:click=move |_| vm.open_assign()
                    >
                        "Add Participant"
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg bg-orange-600 text-white hover:bg-orange-700 disabled:opacity-50"
                        disabled=move || vm.loading.get()
                        on:click=move |_| vm.refresh()
                    >
                        {move || if vm.loading.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <Detail
                    label="Class Date"
                    value=Signal::derive(move || {
                        schedule()
                            .map(|s| schedule_time::date_label(&s.schedule_date))
                            .filter(|label| !label.is_empty())
                            .unwrap_or_else(|| "-".into())
                    })
                />
                <Detail
                    label="Class Time"
                    value=Signal::derive(move || {
                        schedule()
                            .map(|s| schedule_time::time_range(&s.start_time, &s.end_time))
                            .filter(|range| !range.is_empty())
                            .unwrap_or_else(|| "-".into())
                    })
                />
                <Detail
                    label="Instructor"
                    value=Signal::derive(move || schedule().map(|s| instructor_label(&s)).unwrap_or_else(|| "-".into()))
                />
            </div>
            <div class="flex flex-col md:flex-row md:items-center gap-4">
                <label class="flex items-center gap-2 text-sm font-medium text-gray-700">
                    "Attendance Date:"
                    <input
                        type="date"
                        class="border rounded px-2 py-1"
                        prop:value=move || vm.selected_date.get()
                        on:change=move |ev| vm.select_date(event_target_value(&ev))
                    />
                </label>
                <p class="text-sm text-gray-600">
                    "Last scan: "
                    <span class="font-medium text-gray-900">{move || last().user}</span>
                    " · "
                    {move || last().status}
                    " · "
                    {move || last().time}
                </p>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-5 gap-3">
                <Stat label="Assigned" value=Signal::derive(move || stats().total_assigned.to_string()) />
                <Stat label="Scanned" value=Signal::derive(move || stats().total_scanned.to_string()) />
                <Stat label="Not Scanned" value=Signal::derive(move || stats().total_not_scanned.to_string()) />
                <Stat label="Present" value=Signal::derive(move || stats().total_present.to_string()) />
                <Stat label="Late" value=Signal::derive(move || stats().total_late.to_string()) />
            </div>
            <p class="text-sm text-gray-600">
                "Attendance rate: "
                <span class="font-semibold text-gray-900">
                    {move || stats().attendance_rate().map(|rate| format!("{}%", rate)).unwrap_or_else(|| "-".into())}
                </span>
            </p>
        </div>
    }
}

#[component]
fn Detail(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="p-4 bg-gray-50 rounded-lg">
            <p class="text-xs text-gray-500 uppercase tracking-wider font-medium">{label}</p>
            <p class="font-semibold text-gray-900">{move || value.get()}</p>
        </div>
    }
}

#[component]
fn Stat(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="p-3 rounded-lg border border-gray-100 text-center">
            <p class="text-xs text-gray-500">{label}</p>
            <p class="text-xl font-bold text-gray-900">{move || value.get()}</p>
        </div>
    }
}
