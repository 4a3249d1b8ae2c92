/**
 * Demo service for the notifications widget.
 *
 * Serves a layout page embedding the widget, plus the rendered widget as
 * JSON. The poll endpoint and the widget's static files are served by other
 * parts of the installation.
 */
use std::{net::SocketAddr, sync::Arc};

use axum::{Router, body::Body, http::Request, routing::get};
use notifications_widget::{WidgetConfig, WidgetConfigBuilder};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

mod config;
mod handlers;

use config::Config;

#[derive(Debug, Clone)]
struct AppContext {
    builder: WidgetConfigBuilder,
    widget: WidgetConfig,
    listen_addr: SocketAddr,
}

impl nt_app::ContextProvider<Config> for AppContext {
    async fn new(config: Config) -> Self {
        Self {
            builder: WidgetConfigBuilder::new(
                config.poll_endpoint.as_str(),
                config.asset_base_url.as_str(),
            ),
            widget: config.widget_config(),
            listen_addr: config.listen_addr,
        }
    }
}

fn app(context: Arc<AppContext>) -> Router {
    let trace_layer = TraceLayer::new_for_http().on_request(
        |request: &Request<Body>, _: &tracing::Span| {
            tracing::info!(
                "received request: {method} {uri}",
                method = request.method(),
                uri = request.uri()
            );
        },
    );

    let compression_layer = CompressionLayer::new().gzip(true).deflate(true);

    Router::new()
        .route("/", get(handlers::page))
        .route("/widget", get(handlers::widget))
        .route("/health", get(handlers::health))
        .with_state(context)
        .layer(trace_layer)
        .layer(compression_layer)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app_context: AppContext = nt_app::create_app_context().await?;

    tracing::info!(
        theme = %app_context.widget.theme,
        poll_endpoint = %app_context.builder.poll_endpoint(),
        "starting notifications demo"
    );

    let addr = app_context.listen_addr;
    nt_axum::run_app(app(Arc::new(app_context)), addr).await
}
