use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, AssignmentRequest},
};

impl ApiClient {
    pub async fn assign_user(&self, request: &AssignmentRequest) -> Result<(), ApiError> {
        self.post("/schedule-users", json!(request)).await.map(|_| ())
    }

    pub async fn remove_assignment(&self, schedule_id: &str, user_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/schedule-users/{}/{}", schedule_id, user_id))
            .await
            .map(|_| ())
    }
}
