use serde::Serialize;

use crate::asset::{AssetBundle, AssetKind, AssetReference, resolve_asset};
use crate::config::WidgetConfig;
use crate::error::{RenderError, UnsupportedThemeError};
use crate::payload::Payload;
use crate::theme::Theme;
use crate::view::PageView;

pub const DEFAULT_POLL_ENDPOINT: &str = "/notifications/notifications/poll";
pub const DEFAULT_ASSET_BASE_URL: &str = "/assets/notifications";

/// Renders the notifications widget for one installation.
///
/// Holds what is constant across renders: the URL the client polls and the
/// base URL the widget's static files are published under. A builder is
/// immutable and can be shared between concurrent page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfigBuilder {
    poll_endpoint: String,
    bundle: AssetBundle,
}

impl Default for WidgetConfigBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_ENDPOINT, DEFAULT_ASSET_BASE_URL)
    }
}

/// Everything a page needs to boot the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedWidget {
    pub theme: Theme,
    /// Files of the shared asset group.
    pub bundle: Vec<AssetReference>,
    /// Theme files, each depending on the shared asset group.
    pub assets: Vec<AssetReference>,
    /// The `Notifications({...});` statement.
    pub script: String,
}

impl RenderedWidget {
    /// Adds the widget to a page, asset group first, init call last.
    pub fn register(&self, view: &mut PageView) {
        for asset in self.bundle.iter().chain(&self.assets) {
            view.register_asset(asset);
        }
        view.register_js(self.script.as_str());
    }
}

impl WidgetConfigBuilder {
    pub fn new(
        poll_endpoint: impl Into<String>,
        asset_base_url: impl Into<String>,
    ) -> Self {
        Self {
            poll_endpoint: poll_endpoint.into(),
            bundle: AssetBundle::new(asset_base_url),
        }
    }

    pub fn poll_endpoint(&self) -> &str {
        &self.poll_endpoint
    }

    pub const fn bundle(&self) -> &AssetBundle {
        &self.bundle
    }

    /// # Errors
    ///
    /// Returns [`UnsupportedThemeError`] if `theme` is not a built-in theme.
    pub fn validate(&self, theme: &str) -> Result<Theme, UnsupportedThemeError> {
        Theme::validate(theme)
    }

    /// Reference to the theme's file of the given kind, if it has one.
    pub fn resolve_asset(
        &self,
        theme: Theme,
        kind: AssetKind,
    ) -> Option<AssetReference> {
        resolve_asset(theme, kind)
            .map(|filename| self.bundle.dependent(kind, filename))
    }

    pub fn build_payload<'a>(
        &'a self,
        config: &'a WidgetConfig,
        theme: Theme,
    ) -> Payload<'a> {
        Payload::new(config, theme, &self.poll_endpoint)
    }

    /// Validates `config` and produces the widget's assets and init call.
    ///
    /// Nothing is produced unless the whole render succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedTheme`] if the configured theme is
    /// not a built-in one, or [`RenderError::Encoding`] if the payload
    /// cannot be serialized.
    pub fn render(
        &self,
        config: &WidgetConfig,
    ) -> Result<RenderedWidget, RenderError> {
        let theme = self.validate(&config.theme).inspect_err(|err| {
            tracing::warn!("refusing to render notifications widget: {err}");
        })?;

        let assets = AssetKind::ALL
            .into_iter()
            .filter_map(|kind| self.resolve_asset(theme, kind))
            .collect();

        let script = self.build_payload(config, theme).init_call()?;

        tracing::debug!(
            theme = %theme,
            delay = config.delay,
            timeout = config.timeout,
            "rendered notifications widget"
        );

        Ok(RenderedWidget {
            theme,
            bundle: self.bundle.references(),
            assets,
            script,
        })
    }

    /// Renders the widget and registers it on `view`.
    ///
    /// On error `view` is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`WidgetConfigBuilder::render`].
    pub fn render_into(
        &self,
        config: &WidgetConfig,
        view: &mut PageView,
    ) -> Result<(), RenderError> {
        let rendered = self.render(config)?;
        rendered.register(view);
        Ok(())
    }
}
