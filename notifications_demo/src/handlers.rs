use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use notifications_widget::{PageView, RenderError, RenderedWidget, WidgetConfig};
use serde::Deserialize;
use thiserror::Error;

use crate::AppContext;

#[derive(Debug, Default, Deserialize)]
pub struct WidgetQuery {
    theme: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Self::Render(RenderError::UnsupportedTheme(ref err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Render(RenderError::Encoding(ref err)) => {
                tracing::error!("failed to encode widget payload: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render notifications widget".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

fn widget_config(ctx: &AppContext, query: WidgetQuery) -> WidgetConfig {
    let mut config = ctx.widget.clone();
    if let Some(theme) = query.theme {
        config.theme = theme;
    }
    config
}

/// Layout page with the widget and an unread counter in the header.
pub async fn page(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<WidgetQuery>,
) -> Result<Html<String>, ApiError> {
    let config = widget_config(&ctx, query);

    let mut view = PageView::new();
    ctx.builder.render_into(&config, &mut view)?;

    Ok(Html(layout(&view)))
}

/// The rendered widget as JSON, for pages assembled elsewhere.
pub async fn widget(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<WidgetQuery>,
) -> Result<Json<RenderedWidget>, ApiError> {
    let config = widget_config(&ctx, query);
    Ok(Json(ctx.builder.render(&config)?))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn layout(view: &PageView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Notifications</title>
{head}</head>
<body>
<header>Notifications <span class="notifications-count">0</span></header>
{body_end}</body>
</html>
"#,
        head = view.head(),
        body_end = view.body_end(),
    )
}
