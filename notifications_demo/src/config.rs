use std::net::SocketAddr;

use notifications_widget::{
    DEFAULT_ASSET_BASE_URL, DEFAULT_POLL_ENDPOINT, WidgetConfig,
};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Service settings, read from `NOTIFICATIONS_*` environment variables.
///
/// The widget fields are the defaults applied to every rendered page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub poll_endpoint: String,
    pub asset_base_url: String,
    pub theme: String,
    pub client_options: Map<String, Value>,
    pub delay: i64,
    pub timeout: i64,
    pub seen: bool,
    pub counters: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        let widget = WidgetConfig::default();
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            poll_endpoint: DEFAULT_POLL_ENDPOINT.to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            theme: widget.theme,
            client_options: widget.client_options,
            delay: widget.delay,
            timeout: widget.timeout,
            seen: widget.seen,
            counters: Some(vec![".notifications-count".to_string()]),
        }
    }
}

impl Config {
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            theme: self.theme.clone(),
            client_options: self.client_options.clone(),
            delay: self.delay,
            timeout: self.timeout,
            seen: self.seen,
            counters: self.counters.clone(),
        }
    }
}
