use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::WidgetConfig;
use crate::escape::{html_encode, to_script_json};
use crate::theme::Theme;

/// Client-side function the payload is passed to.
pub const INIT_FUNCTION: &str = "Notifications";

/// Settings handed to the client-side `Notifications` function.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload<'a> {
    pub url: &'a str,
    pub theme: Cow<'a, str>,
    pub timeout: i64,
    pub delay: i64,
    pub options: &'a Map<String, Value>,
    pub seen: bool,
    pub counters: Option<&'a [String]>,
}

impl<'a> Payload<'a> {
    pub fn new(
        config: &'a WidgetConfig,
        theme: Theme,
        poll_endpoint: &'a str,
    ) -> Self {
        Self {
            url: poll_endpoint,
            theme: html_encode(theme.as_str()),
            timeout: config.timeout,
            delay: config.delay,
            options: &config.client_options,
            seen: config.seen,
            counters: config.counters.as_deref(),
        }
    }

    /// Encodes the payload as JSON safe to embed in a `<script>` block.
    ///
    /// # Errors
    ///
    /// Returns an error if the client options cannot be serialized.
    pub fn encode(&self) -> serde_json::Result<String> {
        to_script_json(self)
    }

    /// The one-line `Notifications({...});` statement booting the widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded.
    pub fn init_call(&self) -> serde_json::Result<String> {
        Ok(format!("{INIT_FUNCTION}({});", self.encode()?))
    }
}
