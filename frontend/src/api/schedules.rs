use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, Schedule, SchedulePayload},
};

impl ApiClient {
    pub async fn get_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        let mut envelope = self.get("/schedules", &[]).await?;
        Ok(envelope.take_optional("schedules")?.unwrap_or_default())
    }

    pub async fn get_upcoming_schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        let mut envelope = self
            .get("/schedules", &[("upcoming", "true".to_string())])
            .await?;
        Ok(envelope.take_optional("schedules")?.unwrap_or_default())
    }

    pub async fn get_schedule(&self, id: &str) -> Result<Schedule, ApiError> {
        let mut envelope = self.get(&format!("/schedules/{}", id), &[]).await?;
        envelope.take("schedule")
    }

    /// Returns the server message, if any, for the success toast.
    pub async fn create_schedule(&self, payload: &SchedulePayload) -> Result<Option<String>, ApiError> {
        let envelope = self.post("/schedules", json!(payload)).await?;
        Ok(envelope.message)
    }

    pub async fn update_schedule(
        &self,
        id: &str,
        payload: &SchedulePayload,
    ) -> Result<Option<String>, ApiError> {
        let envelope = self
            .put(&format!("/schedules/{}", id), json!(payload))
            .await?;
        Ok(envelope.message)
    }

    pub async fn delete_schedule(&self, id: &str) -> Result<Option<String>, ApiError> {
        let envelope = self.delete(&format!("/schedules/{}", id)).await?;
        Ok(envelope.message)
    }
}
