use std::sync::OnceLock;
use std::time::Duration;

use stream_core::STREAM_NAMES_PARAM;

use crate::interop::query_values;

/// Query parameter that overrides the API base URL.
pub const API_BASE_PARAM: &str = "api";

pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Prefix for `/api/stream/{name}`; empty means same origin.
    pub api_base: String,
    pub poll_interval: Duration,
    pub stream_names_param: &'static str,
}

impl ViewerConfig {
    fn from_location() -> Self {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        let override_base = query_values(API_BASE_PARAM).into_iter().next();

        Self {
            api_base: resolve_api_base(&hostname, override_base.as_deref()),
            poll_interval: POLL_INTERVAL,
            stream_names_param: STREAM_NAMES_PARAM,
        }
    }
}

/// - `?api=` wins when present
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (API serves static files)
pub fn resolve_api_base(hostname: &str, override_base: Option<&str>) -> String {
    if let Some(base) = override_base.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        String::new()
    }
}

static CONFIG: OnceLock<ViewerConfig> = OnceLock::new();

/// Resolved once, at first use.
pub fn viewer_config() -> &'static ViewerConfig {
    CONFIG.get_or_init(ViewerConfig::from_location)
}
