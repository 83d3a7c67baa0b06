use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Option<String>> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_key(obj: &JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn global_object(name: &str) -> Option<JsValue> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            None
        } else {
            Some(any)
        }
    }

    // window.__ATTENDANCE_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." } (env.js)
    // takes precedence over window.__ATTENDANCE_CONFIG written after config.json.
    pub fn snapshot() -> RuntimeConfig {
        let env = global_object("__ATTENDANCE_ENV");
        let cfg = global_object("__ATTENDANCE_CONFIG");
        let pick = |upper: &str, lower: &str| {
            env.as_ref()
                .and_then(|o| read_key(o, &[upper, lower]))
                .or_else(|| cfg.as_ref().and_then(|o| read_key(o, &[lower, upper])))
        };
        RuntimeConfig {
            api_base_url: pick("API_BASE_URL", "api_base_url"),
            time_zone: pick("TIME_ZONE", "time_zone"),
        }
    }

    pub fn write(cfg: &RuntimeConfig) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        if let Some(url) = &cfg.api_base_url {
            let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        }
        if let Some(tz) = &cfg.time_zone {
            let _ = js_sys::Reflect::set(&obj, &"time_zone".into(), &JsValue::from_str(tz));
        }
        let _ = js_sys::Reflect::set(&window, &"__ATTENDANCE_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> RuntimeConfig {
        RuntimeConfig::default()
    }

    pub fn write(_cfg: &RuntimeConfig) {}

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        None
    }
}

/// Applies resolution order: globals first, then `config.json`, then defaults.
pub fn merge(globals: RuntimeConfig, file: Option<RuntimeConfig>) -> RuntimeConfig {
    let file = file.unwrap_or_default();
    RuntimeConfig {
        api_base_url: globals
            .api_base_url
            .filter(|v| !v.trim().is_empty())
            .or(file.api_base_url.filter(|v| !v.trim().is_empty())),
        time_zone: globals.time_zone.or(file.time_zone),
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    init().await;
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Configured IANA zone, if any. `None` means the browser's local clock.
pub fn time_zone() -> Option<String> {
    TIME_ZONE.get().cloned().flatten()
}

pub async fn init() {
    if API_BASE_URL.get().is_some() {
        return;
    }
    let snapshot = globals::snapshot();
    let file = if snapshot.api_base_url.is_some() {
        None
    } else {
        let fetched = globals::fetch_runtime_config().await;
        if let Some(cfg) = &fetched {
            globals::write(cfg);
        }
        fetched
    };
    let resolved = merge(snapshot, file);
    let base = resolved
        .api_base_url
        .as_deref()
        .map(normalize_base_url)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    log::info!("API base URL resolved to {}", base);
    let _ = API_BASE_URL.set(base);
    let _ = TIME_ZONE.set(resolved.time_zone);
}
