use crate::{
    api::User,
    pages::users::{
        utils::{filter_users, role_badge_class},
        view_model::UsersViewModel,
    },
};
use leptos::*;

const HEADERS: [&str; 6] = ["Username", "Full Name", "Email", "RFID Card", "Role", "Status"];

#[component]
pub fn UserTable(vm: UsersViewModel) -> impl IntoView {
    let visible = move || vm.users.with(|users| vm.filter.with(|f| filter_users(users, f)));

    view! {
        <div class="bg-white shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        {HEADERS
                            .into_iter()
                            .map(|h| view! {
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                    {h}
                                </th>
                            })
                            .collect_view()}
                        <th class="px-6 py-3"></th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    <For
                        each=visible
                        key=|user| user.id.clone()
                        children=move |user: User| view! { <UserRow vm=vm user=user /> }
                    />
                </tbody>
            </table>
            <Show when=move || visible().is_empty()>
                <p class="px-6 py-8 text-center text-sm text-gray-500">"No users found."</p>
            </Show>
        </div>
    }
}

#[component]
fn UserRow(vm: UsersViewModel, user: User) -> impl IntoView {
    let (status_label, status_class) = if user.is_active {
        ("Active", "bg-green-100 text-green-800")
    } else {
        ("Inactive", "bg-red-100 text-red-700")
    };
    let edit_target = user.clone();
    let delete_target = user.clone();

    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{user.username.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{user.full_name.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600">{user.email.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-mono text-gray-600">
                {user.rfid_card.clone().unwrap_or_else(|| "-".into())}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", role_badge_class(user.role))>
                    {user.role.label()}
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", status_class)>
                    {status_label}
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-3">
                <button type="button" class="text-orange-600 hover:underline" on:click=move |_| vm.open_edit(&edit_target)>
                    "Edit"
                </button>
                <button
                    type="button"
                    class="text-red-600 hover:underline"
                    on:click=move |_| vm.pending_delete.set(Some(delete_target.clone()))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
