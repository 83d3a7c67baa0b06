use crate::{
    api::{ApiClient, ApiError, ChartBucket, ChartPeriod, DashboardStats},
    pages::dashboard::{
        cache,
        repository::DashboardRepository,
        utils::{activity_entries, apply_result, upcoming_items, ActivityEntry, UpcomingItem, WidgetState},
    },
    utils::{generation::Generation, time},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub stats: RwSignal<WidgetState<DashboardStats>>,
    pub chart: RwSignal<WidgetState<Vec<ChartBucket>>>,
    pub period: RwSignal<ChartPeriod>,
    pub refreshing: RwSignal<bool>,
    pub upcoming_resource: Resource<(), Result<Vec<UpcomingItem>, ApiError>>,
    pub activity_resource: Resource<(), Result<Vec<ActivityEntry>, ApiError>>,
    repository: StoredValue<DashboardRepository>,
    generation: StoredValue<Generation>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_repository(DashboardRepository::new_with_client(Rc::new(api)))
    }

    /// Seeds both widgets from fresh cache entries; the caller starts the
    /// background refresh.
    pub fn new_with_repository(repository: DashboardRepository) -> Self {
        let now = time::now_millis();
        let period = ChartPeriod::default();
        let stats = create_rw_signal(WidgetState::from_cache(cache::read_stats(now)));
        let chart = create_rw_signal(WidgetState::from_cache(cache::read_chart(period, now)));

        let repo = repository.clone();
        let upcoming_resource = create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                async move {
                    let schedules = repo.fetch_upcoming_schedules().await?;
                    Ok(upcoming_items(&schedules, time::today_local()))
                }
            },
        );

        let repo = repository.clone();
        let activity_resource = create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                async move {
                    match repo.fetch_audit_logs().await {
                        Ok(logs) => Ok(activity_entries(&logs, time::local_clock)),
                        Err(err) => {
                            log::warn!("audit log fetch failed: {}", err);
                            Ok(Vec::new())
                        }
                    }
                }
            },
        );

        Self {
            stats,
            chart,
            period: create_rw_signal(period),
            refreshing: create_rw_signal(false),
            upcoming_resource,
            activity_resource,
            repository: store_value(repository),
            generation: store_value(Generation::new()),
        }
    }

    /// Fetches stats and chart together. Only the most recently started
    /// refresh applies its results.
    pub async fn refresh_now(&self) {
        let ticket = self.generation.with_value(|g| g.begin());
        let period = self.period.get_untracked();
        let repository = self.repository.get_value();
        self.refreshing.set(true);

        let (stats, chart) = repository.fetch_overview(period).await;

        if !self.generation.with_value(|g| g.is_current(ticket)) {
            log::debug!("dropping superseded dashboard refresh");
            return;
        }
        let now = time::now_millis();
        if let Ok(data) = &stats {
            cache::write_stats(data, now);
        }
        if let Ok(data) = &chart {
            cache::write_chart(period, data, now);
        }
        self.stats
            .update(|state| *state = apply_result(std::mem::take(state), stats, "Failed to load statistics"));
        self.chart
            .update(|state| *state = apply_result(std::mem::take(state), chart, "Failed to load chart data"));
        self.refreshing.set(false);
    }

    pub fn refresh(&self) {
        let vm = *self;
        spawn_local(async move { vm.refresh_now().await });
    }

    /// Serves the new period from cache when possible, then refetches.
    pub fn select_period(&self, period: ChartPeriod) {
        if self.period.get_untracked() == period {
            return;
        }
        self.period.set(period);
        self.chart.set(WidgetState::from_cache(cache::read_chart(
            period,
            time::now_millis(),
        )));
        self.refresh();
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> DashboardRepository {
        DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))))
    }

    async fn mock_chart(server: &MockServer) {
        server.mock_async(|when, then| {
            when.method(GET).path("/api/attendance/chart");
            then.status(200).json_body(json!({
                "success": true,
                "data": [{ "day": "Mon", "present": 2, "permission": 1, "sick": 0, "absent": 3 }]
            }));
        })
        .await;
    }

    #[tokio::test]
    async fn one_failing_half_leaves_the_other_rendered() {
        cache::clear();
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/dashboard/stats");
                then.status(503);
            })
            .await;
        mock_chart(&server).await;

        let runtime = create_runtime();
        leptos_reactive::suppress_resource_load(true);
        let vm = DashboardViewModel::new_with_repository(repo(&server));
        assert!(vm.stats.get_untracked().loading);

        vm.refresh_now().await;

        let stats = vm.stats.get_untracked();
        assert!(stats.data.is_none());
        assert_eq!(stats.error.as_deref(), Some("Failed to load statistics"));
        let chart = vm.chart.get_untracked();
        assert!(chart.error.is_none());
        assert_eq!(chart.data.unwrap()[0].absent, 3);
        assert!(cache::read_chart(ChartPeriod::Weekly, time::now_millis()).is_some());
        assert!(cache::read_stats(time::now_millis()).is_none());
        leptos_reactive::suppress_resource_load(false);
        runtime.dispose();
    }

    #[tokio::test]
    async fn cached_stats_survive_a_failed_refresh() {
        cache::clear();
        let cached = DashboardStats {
            members: 4,
            cadets: 2,
            main_team: 3,
            total_members: 9,
        };
        cache::write_stats(&cached, time::now_millis());

        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/dashboard/stats");
                then.status(500).json_body(json!({ "message": "db down" }));
            })
            .await;
        mock_chart(&server).await;

        let runtime = create_runtime();
        leptos_reactive::suppress_resource_load(true);
        let vm = DashboardViewModel::new_with_repository(repo(&server));
        let initial = vm.stats.get_untracked();
        assert!(!initial.loading);
        assert_eq!(initial.data.as_ref(), Some(&cached));

        vm.refresh_now().await;
        let after = vm.stats.get_untracked();
        assert_eq!(after.data, Some(cached));
        assert!(after.error.is_none());
        leptos_reactive::suppress_resource_load(false);
        runtime.dispose();
    }

    #[tokio::test]
    async fn fresh_cache_serves_without_network() {
        cache::clear();
        let now = time::now_millis();
        cache::write_stats(&DashboardStats::default(), now);
        cache::write_chart(ChartPeriod::Weekly, &[], now);

        let server = MockServer::start_async().await;
        let stats_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/dashboard/stats");
                then.status(200).json_body(json!({ "success": true, "data": {} }));
            })
            .await;

        let runtime = create_runtime();
        leptos_reactive::suppress_resource_load(true);
        let vm = DashboardViewModel::new_with_repository(repo(&server));
        assert!(vm.stats.get_untracked().data.is_some());
        assert!(vm.chart.get_untracked().data.is_some());
        assert_eq!(stats_mock.hits_async().await, 0);
        leptos_reactive::suppress_resource_load(false);
        runtime.dispose();
    }
}
