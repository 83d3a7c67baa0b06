use crate::api::{ApiClient, ApiError, User, UserPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct UsersRepository {
    client: Rc<ApiClient>,
}

impl Default for UsersRepository {
    fn default() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }
}

impl UsersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.get_users().await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<(), ApiError> {
        self.client.create_user(payload).await.map(|_| ())
    }

    pub async fn update_user(&self, id: &str, payload: &UserPayload) -> Result<(), ApiError> {
        self.client.update_user(id, payload).await.map(|_| ())
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_user(id).await
    }
}
