use crate::pages::schedules::{
    utils::{parse_weekday, weekday_name, ActiveFilter, WEEKDAYS},
    view_model::ScheduleViewModel,
};
use leptos::*;

#[component]
pub fn ScheduleFilters(vm: ScheduleViewModel) -> impl IntoView {
    let filter = vm.filter;

    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3">
            <label class="flex-1 min-w-[12rem] text-sm font-medium text-gray-700">
                "Search"
                <input
                    type="search"
                    placeholder="Class, subject, instructor or room"
                    class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
            </label>
            <label class="text-sm font-medium text-gray-700">
                "Day"
                <select
                    class="mt-1 block border border-gray-300 rounded-md px-3 py-2 text-sm"
                    on:change=move |ev| filter.update(|f| f.weekday = parse_weekday(&event_target_value(&ev)))
                >
                    <option value="" selected=move || filter.with(|f| f.weekday.is_none())>"All days"</option>
                    {WEEKDAYS
                        .into_iter()
                        .map(|day| view! {
                            <option
                                value=weekday_name(day)
                                selected=move || filter.with(|f| f.weekday == Some(day))
                            >
                                {weekday_name(day)}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="text-sm font-medium text-gray-700">
                "Status"
                <select
                    class="mt-1 block border border-gray-300 rounded-md px-3 py-2 text-sm"
                    on:change=move |ev| filter.update(|f| f.active = ActiveFilter::parse(&event_target_value(&ev)))
                >
                    {[
                        (ActiveFilter::All, "All"),
                        (ActiveFilter::Active, "Active"),
                        (ActiveFilter::Inactive, "Inactive"),
                    ]
                        .into_iter()
                        .map(|(option, label)| view! {
                            <option value=option.as_str() selected=move || filter.with(|f| f.active == option)>
                                {label}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
            <Show when=move || filter.with(|f| f.is_filtered())>
                <button
                    type="button"
                    class="px-3 py-2 text-sm text-gray-600 hover:text-gray-900"
                    on:click=move |_| vm.clear_filters()
                >
                    "Clear"
                </button>
            </Show>
            <div class="ml-auto flex gap-2">
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg border border-gray-300 text-sm text-gray-700 hover:bg-gray-50 disabled:opacity-50"
                    disabled=move || vm.loading.get()
                    on:click=move |_| vm.refresh()
                >
                    "Refresh"
                </button>
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg bg-orange-600 text-sm text-white hover:bg-orange-700"
                    on:click=move |_| vm.open_create()
                >
                    "New Schedule"
                </button>
            </div>
        </div>
    }
}
