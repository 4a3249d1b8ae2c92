//! Server-side helper for the notifications polling widget.
//!
//! The widget itself lives in the browser: a small `Notifications` client
//! function polls the server and hands new notifications to one of the
//! supported display libraries (jQuery Growl or Noty). This crate produces
//! everything a page needs to boot it:
//!
//! - the stylesheet and script references for the selected theme,
//! - the shared `notifications` asset group those references depend on,
//! - a single `Notifications({...});` call carrying the widget settings.
//!
//! ```
//! use notifications_widget::{PageView, WidgetConfig, WidgetConfigBuilder};
//!
//! let builder = WidgetConfigBuilder::default();
//! let config = WidgetConfig {
//!     counters: Some(vec![".notifications-count".to_string()]),
//!     ..WidgetConfig::default()
//! };
//!
//! let mut view = PageView::new();
//! builder.render_into(&config, &mut view).unwrap();
//! assert!(view.body_end().contains("Notifications({"));
//! ```

pub mod asset;
pub mod config;
pub mod error;
pub mod escape;
pub mod payload;
pub mod theme;
pub mod view;
pub mod widget;

pub use asset::{AssetBundle, AssetKind, AssetReference, resolve_asset};
pub use config::WidgetConfig;
pub use error::{RenderError, UnsupportedThemeError};
pub use payload::{INIT_FUNCTION, Payload};
pub use theme::Theme;
pub use view::PageView;
pub use widget::{
    DEFAULT_ASSET_BASE_URL, DEFAULT_POLL_ENDPOINT, RenderedWidget,
    WidgetConfigBuilder,
};
