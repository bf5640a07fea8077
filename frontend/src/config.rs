use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// First candidate that is still non-blank after normalising, in order.
pub fn first_base_url<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|raw| normalize_base_url(&raw))
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_global(global: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    // window.__ESPOINT_ENV (env.js) wins over window.__ESPOINT_CONFIG.
    pub fn global_candidates() -> [Option<String>; 2] {
        [
            read_global("__ESPOINT_ENV", &["API_BASE_URL", "api_base_url"]),
            read_global("__ESPOINT_CONFIG", &["api_base_url", "API_BASE_URL"]),
        ]
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let (Some(window), Some(url)) = (web_sys::window(), cfg.api_base_url.as_ref()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&window, &"__ESPOINT_CONFIG".into(), &obj);
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

#[cfg(target_arch = "wasm32")]
async fn resolve_base_url() -> Option<String> {
    if let Some(url) = first_base_url(browser::global_candidates()) {
        return Some(url);
    }
    let cfg = browser::fetch_runtime_config().await?;
    browser::write_window_config(&cfg);
    first_base_url([cfg.api_base_url])
}

#[cfg(not(target_arch = "wasm32"))]
async fn resolve_base_url() -> Option<String> {
    first_base_url([std::env::var("ESPOINT_API_BASE_URL").ok()])
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let resolved = resolve_base_url()
        .await
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    log::debug!("API base URL resolved to {}", resolved);
    cache_base_url(&resolved)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
