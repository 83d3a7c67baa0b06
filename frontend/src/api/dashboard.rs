use super::{
    client::ApiClient,
    types::{ApiError, DashboardStats},
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let mut envelope = self.get("/dashboard/stats", &[]).await?;
        Ok(envelope.take_optional("data")?.unwrap_or_default())
    }
}
