use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::data::ProjectedTable;

use super::page::render_page;

// ---------------------------------------------------------------------------
// HTTP surface: a single page at GET /
// ---------------------------------------------------------------------------

/// Build the router. The projected table is injected here and shared
/// read-only across requests, so no locking is needed.
pub fn router(table: Arc<ProjectedTable>) -> Router {
    Router::new().route("/", get(index)).with_state(table)
}

/// `GET /` — re-render all three charts and return the page. A render
/// failure is a request-level 500, not a process failure.
async fn index(State(table): State<Arc<ProjectedTable>>) -> Response {
    match render_page(&table) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::error!("failed to render page: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to render page: {e}"),
            )
                .into_response()
        }
    }
}

/// Bind the listener and serve until the process exits.
pub async fn serve(addr: &str, table: Arc<ProjectedTable>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("listening on http://{addr}");
    axum::serve(listener, router(table)).await?;
    Ok(())
}
