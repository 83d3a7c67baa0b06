use crate::{
    api::DashboardStats,
    components::layout::ErrorMessage,
    pages::dashboard::utils::{total_members, WidgetState},
};
use leptos::*;

#[component]
pub fn StatsCards(#[prop(into)] state: Signal<WidgetState<DashboardStats>>) -> impl IntoView {
    let value = move |pick: fn(&DashboardStats) -> u32| {
        move || {
            state.with(|s| match (&s.data, s.loading) {
                (Some(stats), _) => pick(stats).to_string(),
                (None, true) => "...".to_string(),
                (None, false) => "-".to_string(),
            })
        }
    };

    view! {
        <div class="space-y-3">
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <ErrorMessage message=message /> })
            }}
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-4">
                <StatCard label="Total Members" value=Signal::derive(value(total_members)) highlight=true />
                <StatCard label="Members" value=Signal::derive(value(|s| s.members)) />
                <StatCard label="Cadets" value=Signal::derive(value(|s| s.cadets)) />
                <StatCard label="Main Team" value=Signal::derive(value(|s| s.main_team)) />
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: Signal<String>,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "p-6 rounded-2xl bg-orange-500 text-white shadow"
    } else {
        "p-6 rounded-2xl bg-white border border-gray-100 shadow"
    };
    view! {
        <div class=class>
            <p class="text-xs font-bold uppercase tracking-widest opacity-80">{label}</p>
            <p class="mt-3 text-3xl font-extrabold">{move || value.get()}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_total_as_sum_of_roles() {
        let html = render_to_string(|| {
            let state = create_rw_signal(WidgetState {
                data: Some(DashboardStats {
                    members: 10,
                    cadets: 6,
                    main_team: 4,
                    total_members: 0,
                }),
                loading: false,
                error: None,
            });
            view! { <StatsCards state=state /> }
        });
        assert!(html.contains("Total Members"));
        assert!(html.contains("20"));
        assert!(html.contains("Main Team"));
    }

    #[test]
    fn renders_error_without_data() {
        let html = render_to_string(|| {
            let state = create_rw_signal(WidgetState::<DashboardStats> {
                data: None,
                loading: false,
                error: Some("Failed to load statistics".into()),
            });
            view! { <StatsCards state=state /> }
        });
        assert!(html.contains("Failed to load statistics"));
    }
}
