use crate::{
    api::Role,
    pages::users::{utils::StatusFilter, view_model::UsersViewModel},
};
use leptos::*;

#[component]
pub fn UserFilters(vm: UsersViewModel) -> impl IntoView {
    let filter = vm.filter;
    let refreshing = vm.loading;

    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-wrap items-end gap-3">
            <label class="flex-1 min-w-[12rem] text-sm font-medium text-gray-700">
                "Search"
                <input
                    type="search"
                    placeholder="Username, name or email"
                    class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
            </label>
            <label class="text-sm font-medium text-gray-700">
                "Role"
                <select
                    class="mt-1 block border border-gray-300 rounded-md px-3 py-2 text-sm"
                    on:change=move |ev| filter.update(|f| f.role = Role::parse(&event_target_value(&ev)))
                >
                    <option value="all" selected=move || filter.with(|f| f.role.is_none())>"All roles"</option>
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! {
                            <option value=role.as_str() selected=move || filter.with(|f| f.role == Some(role))>
                                {role.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="text-sm font-medium text-gray-700">
                "Status"
                <select
                    class="mt-1 block border border-gray-300 rounded-md px-3 py-2 text-sm"
                    on:change=move |ev| filter.update(|f| f.status = StatusFilter::parse(&event_target_value(&ev)))
                >
                    {[
                        (StatusFilter::All, "All"),
                        (StatusFilter::Active, "Active"),
                        (StatusFilter::Inactive, "Inactive"),
                    ]
                        .into_iter()
                        .map(|(option, label)| view! {
                            <option value=option.as_str() selected=move || filter.with(|f| f.status == option)>
                                {label}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
            <div class="ml-auto flex gap-2">
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg border border-gray-300 text-sm text-gray-700 hover:bg-gray-50 disabled:opacity-50"
                    disabled=move || refreshing.get()
                    on:click=move |_| spawn_local(async move { vm.refresh().await })
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                </button>
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg bg-orange-600 text-sm text-white hover:bg-orange-700"
                    on:click=move |_| vm.open_create()
                >
                    "Add User"
                </button>
            </div>
        </div>
    }
}
