use crate::pages::dashboard::{
    components::{AttendanceChart, RecentActivitySection, StatsCards, UpcomingSchedulesSection},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    // Initial background refresh, even when the cache was fresh.
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            vm.refresh();
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        use crate::pages::dashboard::cache::REFRESH_INTERVAL_MS;
        use gloo_timers::callback::Interval;

        // Dropped with the page, which cancels it.
        let _interval = store_value(Interval::new(REFRESH_INTERVAL_MS, move || vm.refresh()));
    }

    let on_refresh = Callback::new(move |_| vm.refresh());
    let on_period = Callback::new(move |period| vm.select_period(period));

    view! {
        <DashboardFrame refreshing=vm.refreshing on_refresh=on_refresh>
            <StatsCards state=vm.stats />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2">
                    <AttendanceChart state=vm.chart period=vm.period on_period=on_period />
                </div>
                <UpcomingSchedulesSection upcoming=vm.upcoming_resource />
            </div>
            <RecentActivitySection activity=vm.activity_resource />
        </DashboardFrame>
    }
}
