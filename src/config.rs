//! Client Configuration
//!
//! Optional settings injected by the hosting page as
//! `window.__TASK_LIST_CONFIG__ = { apiBaseUrl, noticeTimeoutMs, logLevel }`.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the JS global holding the config object
pub const CONFIG_GLOBAL: &str = "__TASK_LIST_CONFIG__";

/// Runtime configuration (every field has a default)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Task collection endpoint
    pub api_base_url: String,
    /// How long an error notification stays visible
    pub notice_timeout_ms: u32,
    /// Max tracing level for console output
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api/tasks".to_string(),
            notice_timeout_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Read the config global; absent means defaults
    pub fn load() -> Result<Self, String> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| format!("{:?}", e))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value::<Self>(raw)
            .map(Self::normalized)
            .map_err(|e| e.to_string())
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            Self::default().api_base_url
        } else {
            trimmed.to_string()
        };
        self
    }

    /// Parsed log level; `None` if the configured name is unknown
    pub fn tracing_level(&self) -> Option<tracing::Level> {
        self.log_level.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_value(json!({ "apiBaseUrl": "https://tasks.example.com/api/tasks/" }))
                .unwrap();
        let config = config.normalized();

        assert_eq!(config.api_base_url, "https://tasks.example.com/api/tasks");
        assert_eq!(config.notice_timeout_ms, 5000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_blank_base_url_falls_back() {
        let config = ClientConfig {
            api_base_url: "  ".to_string(),
            ..ClientConfig::default()
        }
        .normalized();
        assert_eq!(config.api_base_url, "/api/tasks");
    }

    #[test]
    fn test_tracing_level() {
        let mut config = ClientConfig::default();
        assert_eq!(config.tracing_level(), Some(tracing::Level::INFO));

        config.log_level = "DEBUG".to_string();
        assert_eq!(config.tracing_level(), Some(tracing::Level::DEBUG));

        config.log_level = "chatty".to_string();
        assert_eq!(config.tracing_level(), None);
    }
}
