use crate::{
    api::ApiError,
    components::{empty_state::EmptyState, layout::{ErrorMessage, LoadingSpinner}},
    pages::dashboard::utils::UpcomingItem,
};
use leptos::*;

#[component]
pub fn UpcomingSchedulesSection(
    upcoming: Resource<(), Result<Vec<UpcomingItem>, ApiError>>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-gray-900">"Upcoming Schedules"</h3>
            {move || match upcoming.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! {
                    <ErrorMessage message=err.user_message("Failed to load schedules") />
                }
                .into_view(),
                Some(Ok(items)) if items.is_empty() => view! {
                    <EmptyState title="No upcoming schedules" />
                }
                .into_view(),
                Some(Ok(items)) => view! {
                    <ul class="divide-y divide-gray-100">
                        <For
                            each=move || items.clone()
                            key=|item| item.id.clone()
                            children=move |item: UpcomingItem| view! {
                                <li class="py-3 flex items-center justify-between">
                                    <div>
                                        <p class="text-sm font-medium text-gray-900">{item.name}</p>
                                        <p class="text-xs text-gray-500">{item.description}</p>
                                    </div>
                                    <span class="text-xs font-semibold text-orange-600">{item.relative}</span>
                                </li>
                            }
                        />
                    </ul>
                }
                .into_view(),
            }}
        </div>
    }
}
