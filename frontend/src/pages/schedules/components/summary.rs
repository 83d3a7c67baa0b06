use crate::pages::schedules::utils::ScheduleSummary;
use leptos::*;

#[component]
pub fn ScheduleSummaryCards(#[prop(into)] summary: Signal<ScheduleSummary>) -> impl IntoView {
    let cards = [
        ("Total Schedules", "text-gray-900", Signal::derive(move || summary.get().total)),
        ("Active", "text-green-600", Signal::derive(move || summary.get().active)),
        ("Today", "text-orange-600", Signal::derive(move || summary.get().today)),
    ];

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
            {cards
                .into_iter()
                .map(|(label, color, value)| view! {
                    <div class="bg-white shadow rounded-lg p-4">
                        <p class="text-sm text-gray-500">{label}</p>
                        <p class=format!("text-2xl font-semibold {}", color)>{move || value.get()}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
