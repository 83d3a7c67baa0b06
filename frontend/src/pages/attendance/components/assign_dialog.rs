use crate::{api::AvailableUser, pages::attendance::view_model::AttendanceViewModel};
use leptos::*;

#[component]
pub fn AssignUserDialog(vm: AttendanceViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.assign_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| vm.close_assign()
                ></button>
                <div class="relative z-[61] w-full max-w-lg rounded-lg bg-white shadow-xl p-6 space-y-4" role="dialog">
                    <h2 class="text-lg font-semibold text-gray-900">"Add Participant"</h2>
                    <input
                        type="search"
                        placeholder="Search by name, username or email"
                        class="w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                        prop:value=move || vm.assign_search.get()
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            vm.assign_search.set(term.clone());
                            vm.search_candidates_later(term);
                        }
                    />
                    <div class="max-h-80 overflow-y-auto">
                        {move || {
                            if vm.candidates_loading.get() {
                                return view! { <p class="text-sm text-gray-500">"Searching..."</p> }.into_view();
                            }
                            let users = vm.candidates.get();
                            if users.is_empty() {
                                return view! { <p class="text-sm text-gray-500">"No available users."</p> }.into_view();
                            }
                            view! {
                                <ul class="divide-y divide-gray-100">
                                    {users.into_iter().map(|user| view! { <CandidateRow vm=vm user=user /> }).collect_view()}
                                </ul>
                            }
                            .into_view()
                        }}
                    </div>
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-gray-100 text-gray-800 hover:bg-gray-200"
                            on:click=move |_| vm.close_assign()
                        >
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CandidateRow(vm: AttendanceViewModel, user: AvailableUser) -> impl IntoView {
    let user_id = user.id.clone();
    view! {
        <li class="py-2 flex items-center justify-between">
            <div>
                <p class="text-sm font-medium text-gray-900">{user.full_name}</p>
                <p class="text-xs text-gray-500">{format!("@{} · {}", user.username, user.email)}</p>
            </div>
            <button
                type="button"
                class="px-3 py-1 rounded-md text-sm bg-orange-500 text-white hover:bg-orange-600"
                on:click=move |_| {
                    let user_id = user_id.clone();
                    spawn_local(async move { vm.assign(user_id).await })
                }
            >
                "Assign"
            </button>
        </li>
    }
}
