use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

use super::types::SessionUser;
use crate::utils::storage;

pub const TOKEN_KEY: &str = "authToken";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub exp: Option<i64>,
}

pub fn load() -> Option<String> {
    match storage::get_item(TOKEN_KEY) {
        Ok(token) => token.filter(|t| !t.trim().is_empty()),
        Err(err) => {
            log::warn!("token storage unavailable: {}", err);
            None
        }
    }
}

pub fn save(token: &str) -> Result<(), String> {
    storage::set_item(TOKEN_KEY, token)
}

pub fn clear() {
    if let Err(err) = storage::remove_item(TOKEN_KEY) {
        log::warn!("failed to clear token: {}", err);
    }
}

/// Unverified payload decode. The server remains the only authority.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn session_user(token: &str) -> Option<SessionUser> {
    decode_claims(token).and_then(|claims| claims.user)
}

/// Missing `exp` or an undecodable payload counts as expired.
pub fn is_expired(token: &str, now_secs: i64) -> bool {
    match decode_claims(token).and_then(|claims| claims.exp) {
        Some(exp) => exp <= now_secs,
        None => true,
    }
}

#[cfg(test)]
pub(crate) fn encode_for_test(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, body)
}
