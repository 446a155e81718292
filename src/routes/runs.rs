// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run submission and listing routes.

use crate::error::{AppError, Result};
use crate::models::{RunRecord, RunView};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use std::fmt::Write as _;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/runs", get(show_runs).post(submit_run))
        .route("/api/runs", get(list_runs))
}

/// Record a run from a JSON body.
///
/// The body is taken as raw bytes so decode failures come back as 400 with
/// the decoder's message.
async fn submit_run(State(state): State<Arc<AppState>>, body: Bytes) -> Result<StatusCode> {
    let ingestion = state.ingestion.clone();
    run_blocking(move || ingestion.submit(&body)).await??;
    Ok(StatusCode::ACCEPTED)
}

/// HTML page listing every run.
async fn show_runs(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let runs = list_all(&state).await?;
    Ok(Html(render_runs_page(&state.config.page_title, &runs)))
}

/// Every run as JSON, with the same formatting as the HTML page.
async fn list_runs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<RunView>>> {
    let runs = list_all(&state).await?;
    Ok(Json(runs.iter().map(RunView::from).collect()))
}

async fn list_all(state: &AppState) -> Result<Vec<RunRecord>> {
    let ingestion = state.ingestion.clone();
    Ok(run_blocking(move || ingestion.list()).await??)
}

/// Run store work on the blocking pool; stores may do synchronous file I/O.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("store task failed")))
}

/// Render the run listing as a standalone HTML document.
pub fn render_runs_page(title: &str, runs: &[RunRecord]) -> String {
    let title = escape_html(title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{title}</title>");
    html.push_str(
        "<style>table{border-collapse:collapse}td,th{padding:4px 12px;text-align:right}</style>\n",
    );
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{title}</h1>");
    html.push_str("<table>\n<thead><tr><th>Date</th><th>Distance</th><th>Time</th><th>Pace (min/km)</th></tr></thead>\n<tbody>\n");

    if runs.is_empty() {
        html.push_str("<tr><td colspan=\"4\">No runs recorded yet.</td></tr>\n");
    }

    for view in runs.iter().map(RunView::from) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&view.date),
            escape_html(&view.distance),
            escape_html(&view.duration),
            escape_html(&view.pace),
        );
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
