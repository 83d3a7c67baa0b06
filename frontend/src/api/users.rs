use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, User, UserPayload},
};

impl ApiClient {
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        let mut envelope = self.get("/users", &[]).await?;
        Ok(envelope.take_optional("users")?.unwrap_or_default())
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        let mut envelope = self.get(&format!("/users/{}", id), &[]).await?;
        envelope.take("user")
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<Option<User>, ApiError> {
        let mut envelope = self.post("/users", json!(payload)).await?;
        envelope.take_optional("user")
    }

    pub async fn update_user(&self, id: &str, payload: &UserPayload) -> Result<Option<User>, ApiError> {
        let mut envelope = self.put(&format!("/users/{}", id), json!(payload)).await?;
        envelope.take_optional("user")
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", id)).await.map(|_| ())
    }
}
