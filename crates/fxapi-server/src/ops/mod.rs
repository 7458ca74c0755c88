//! Operational HTTP endpoints.
//!
//! - `/metrics` : Prometheus text format

use axum::{http::StatusCode, response::{IntoResponse, Response}};

use crate::api::ApiResult;
use crate::app_state::AppState;

pub async fn metrics(axum::extract::State(state): axum::extract::State<AppState>) -> ApiResult<Response> {
    let body = state.metrics().render()?;

    Ok((
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response())
}
