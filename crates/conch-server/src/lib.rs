//! HTTP graph listener over a processed MBO report.
//!
//! The listener performs no aggregation: it holds an `Arc<MantaReport>`
//! that was finalized before the router is built, and every handler only
//! reads it. Concurrent requests are therefore safe without locks.

mod chart;
mod routes;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use conch_report::MantaReport;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use chart::{bar_chart_png, ChartError};

#[derive(Clone)]
pub struct AppState {
    report: Arc<MantaReport>,
}

pub fn router(report: Arc<MantaReport>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/full", get(routes::full_text))
        .route("/full.csv", get(routes::full_csv))
        .route("/style.css", get(routes::style))
        .route("/reports/times/{az}", get(routes::times_by_az))
        .route("/reports/times/{az}/{component}", get(routes::times_by_component))
        .route(
            "/reports/times/{az}/{component}/{subtype}",
            get(routes::times_by_subtype),
        )
        .route("/graphics/{az}/by_type.png", get(routes::graph_by_type))
        .route("/graphics/{az}/by_vendor.png", get(routes::graph_by_vendor))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { report })
}

/// Bind and serve until the process is terminated.
pub async fn run(report: MantaReport, addr: &str) -> anyhow::Result<()> {
    let app = router(Arc::new(report));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
