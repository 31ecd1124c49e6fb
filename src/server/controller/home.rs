use axum::response::{Html, IntoResponse};

static INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Serves the landing page
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
