use std::{cell::RefCell, rc::Rc};

use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use super::{token, types::ApiError};
use crate::config;

type UnauthorizedHook = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    unauthorized_hooks: Rc<RefCell<Vec<UnauthorizedHook>>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parsed `{success, message?, ...payload}` body with `success` removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    pub message: Option<String>,
    fields: Map<String, Value>,
}

impl Envelope {
    /// Objects are used as-is; any other JSON body is exposed under `data`.
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        let mut fields = match body {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".into(), other);
                map
            }
        };
        let message = fields
            .remove("message")
            .and_then(|m| m.as_str().map(str::to_string));
        let success = fields
            .remove("success")
            .and_then(|s| s.as_bool())
            .unwrap_or(true);
        if !success {
            let text = message
                .clone()
                .or_else(|| {
                    fields
                        .get("error")
                        .and_then(|e| e.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| "Request failed".to_string());
            return Err(ApiError::app(text));
        }
        Ok(Self { message, fields })
    }

    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, ApiError> {
        let value = self
            .fields
            .remove(key)
            .ok_or_else(|| ApiError::unknown(format!("Response is missing `{}`", key)))?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::unknown(format!("Failed to parse `{}`: {}", key, e)))
    }

    /// Absent or null keys decode to `None`.
    pub fn take_optional<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, ApiError> {
        match self.fields.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| ApiError::unknown(format!("Failed to parse `{}`: {}", key, e))),
        }
    }
}

fn error_text(body: &Option<Value>) -> Option<String> {
    let body = body.as_ref()?;
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            unauthorized_hooks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
            ..Self::new()
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        }
    }

    /// Called after any 401, once the stored token has been cleared.
    pub fn on_unauthorized(&self, hook: impl Fn() + 'static) {
        self.unauthorized_hooks.borrow_mut().push(Rc::new(hook));
    }

    fn notify_unauthorized(&self) {
        token::clear();
        let hooks: Vec<UnauthorizedHook> = self.unauthorized_hooks.borrow().clone();
        for hook in hooks {
            hook();
        }
    }

    pub(crate) async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Envelope, ApiError> {
        self.send(Method::GET, path, query, None, true).await
    }

    pub(crate) async fn post(&self, path: &str, body: Value) -> Result<Envelope, ApiError> {
        self.send(Method::POST, path, &[], Some(body), true).await
    }

    pub(crate) async fn put(&self, path: &str, body: Value) -> Result<Envelope, ApiError> {
        self.send(Method::PUT, path, &[], Some(body), true).await
    }

    pub(crate) async fn patch(&self, path: &str, body: Value) -> Result<Envelope, ApiError> {
        self.send(Method::PATCH, path, &[], Some(body), true).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Envelope, ApiError> {
        self.send(Method::DELETE, path, &[], None, true).await
    }

    /// No bearer token, and a 401 is an ordinary failure (bad credentials).
    pub(crate) async fn post_public(&self, path: &str, body: Value) -> Result<Envelope, ApiError> {
        self.send(Method::POST, path, &[], Some(body), false).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        authorized: bool,
    ) -> Result<Envelope, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self
            .http_client()
            .request(method.clone(), format!("{}{}", base_url, path));
        if !query.is_empty() {
            request = request.query(query);
        }
        if authorized {
            if let Some(token) = token::load() {
                request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        let parsed: Option<Value> = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&text).ok()
        };

        if status == StatusCode::UNAUTHORIZED && authorized {
            log::info!("{} {} returned 401; session cleared", method, path);
            self.notify_unauthorized();
            return Err(ApiError::unauthorized(
                error_text(&parsed).unwrap_or_else(|| "Session expired".to_string()),
            ));
        }

        if !status.is_success() {
            return Err(match error_text(&parsed) {
                Some(message) => ApiError {
                    details: Some(json!({ "status": status.as_u16() })),
                    ..ApiError::request_failed(message)
                },
                None => ApiError::request_failed(format!(
                    "Request failed with status {}",
                    status.as_u16()
                )),
            });
        }

        match parsed {
            Some(body) => Envelope::from_body(body),
            None if text.trim().is_empty() => Ok(Envelope::default()),
            None => Err(ApiError::unknown("Failed to parse response")),
        }
    }
}
