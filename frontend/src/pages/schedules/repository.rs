use crate::api::{ApiClient, ApiError, Schedule, SchedulePayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct ScheduleRepository {
    client: Rc<ApiClient>,
}

impl Default for ScheduleRepository {
    fn default() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }
}

impl ScheduleRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Schedule>, ApiError> {
        self.client.get_schedules().await
    }

    /// Creates when `id` is `None`, updates otherwise. Yields the server message.
    pub async fn save(&self, id: Option<&str>, payload: &SchedulePayload) -> Result<Option<String>, ApiError> {
        match id {
            Some(id) => self.client.update_schedule(id, payload).await,
            None => self.client.create_schedule(payload).await,
        }
    }

    pub async fn delete(&self, id: &str) -> Result<Option<String>, ApiError> {
        self.client.delete_schedule(id).await
    }
}
