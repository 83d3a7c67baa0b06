use crate::{
    api::ApiError,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::dashboard::utils::ActivityEntry,
};
use leptos::*;

#[component]
pub fn RecentActivitySection(
    activity: Resource<(), Result<Vec<ActivityEntry>, ApiError>>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-gray-900">"Recent Activity"</h3>
            {move || match activity.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Ok(entries)) if !entries.is_empty() => view! {
                    <table class="min-w-full text-sm">
                        <thead>
                            <tr class="text-left text-xs uppercase text-gray-500">
                                <th class="py-2">"Name"</th>
                                <th class="py-2">"Time"</th>
                                <th class="py-2">"Status"</th>
                                <th class="py-2">"Schedule"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            <For
                                each=move || entries.clone()
                                key=|entry| entry.id.clone()
                                children=move |entry: ActivityEntry| view! {
                                    <tr>
                                        <td class="py-2 text-gray-900">{entry.name}</td>
                                        <td class="py-2 text-gray-600">{entry.time}</td>
                                        <td class="py-2 text-gray-600">{entry.status}</td>
                                        <td class="py-2 text-gray-600">{entry.schedule}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                }
                .into_view(),
                Some(_) => view! { <EmptyState title="No recent attendance activity" /> }.into_view(),
            }}
        </div>
    }
}
