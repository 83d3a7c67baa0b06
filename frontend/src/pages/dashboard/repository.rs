use crate::api::{ApiClient, ApiError, AuditLog, ChartBucket, ChartPeriod, DashboardStats, Schedule};
use futures::future::join;
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Stats and chart in parallel; each half fails independently.
    pub async fn fetch_overview(
        &self,
        period: ChartPeriod,
    ) -> (
        Result<DashboardStats, ApiError>,
        Result<Vec<ChartBucket>, ApiError>,
    ) {
        join(
            self.client.get_dashboard_stats(),
            self.client.get_attendance_chart(period),
        )
        .await
    }

    pub async fn fetch_upcoming_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        self.client.get_upcoming_schedules().await
    }

    pub async fn fetch_audit_logs(&self) -> Result<Vec<AuditLog>, ApiError> {
        self.client.get_audit_logs().await
    }
}
