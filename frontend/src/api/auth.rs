use serde_json::json;

use super::{
    client::ApiClient,
    token,
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// Persists the returned token. The user falls back to the token's
    /// `user` claim when the response omits it.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let mut envelope = self
            .post_public("/auth/login", json!(request))
            .await?;
        let message = envelope.message.clone();
        let token_value: String = envelope.take("token")?;
        if token_value.trim().is_empty() {
            return Err(ApiError::app(
                message.unwrap_or_else(|| "Login failed.".to_string()),
            ));
        }
        let user = envelope
            .take_optional("user")?
            .or_else(|| token::session_user(&token_value));
        token::save(&token_value).map_err(ApiError::unknown)?;
        Ok(LoginResponse {
            token: token_value,
            user,
            message,
        })
    }

    /// Best effort; the local token is dropped whatever the server says.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post("/auth/logout", json!({})).await.map(|_| ());
        token::clear();
        if let Err(err) = &result {
            log::warn!("logout request failed: {}", err);
        }
        result
    }
}
