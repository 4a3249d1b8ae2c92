use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::theme::Theme;

pub const DEFAULT_DELAY_MS: i64 = 5000;
pub const DEFAULT_TIMEOUT_MS: i64 = 2000;

/// Options for a single render of the notifications widget.
///
/// Only `theme` is checked. Everything else is handed to the client as is,
/// the browser-side library owns the meaning of `client_options` and of
/// the counter selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Name of the display library, one of [`Theme::ALL`].
    pub theme: String,
    /// Extra options for the display library.
    #[serde(alias = "clientOptions")]
    pub client_options: Map<String, Value>,
    /// Milliseconds between two polls.
    pub delay: i64,
    /// Poll request timeout in milliseconds.
    pub timeout: i64,
    /// Whether notifications already seen are shown again.
    pub seen: bool,
    /// Selectors of the elements showing the unread count.
    pub counters: Option<Vec<String>>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default().as_str().to_string(),
            client_options: Map::new(),
            delay: DEFAULT_DELAY_MS,
            timeout: DEFAULT_TIMEOUT_MS,
            seen: false,
            counters: None,
        }
    }
}
