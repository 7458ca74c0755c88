//! Incrementer endpoints: a random draw feeds a counter and a summary per name.

use axum::extract::State;

use fxapi_core::curve::format_fixed;
use fxapi_core::random::uniform_int;

use crate::api::error::ApiResult;
use crate::api::params::{self, Params};
use crate::app_state::AppState;
use crate::obs::metrics::{INC_API, INC_API_SUM};

/// `GET /inc/update/:name/:min/:max`
pub async fn update(
    State(state): State<AppState>,
    Params((name, min, max)): Params<(String, String, String)>,
) -> ApiResult<String> {
    let min = params::non_negative("min", params::number("min", &min)?)?;
    let max: i64 = params::number("max", &max)?;

    let drawn = uniform_int(&mut rand::thread_rng(), min, max)?;
    state.metrics().record_increment(&name, drawn as f64)?;
    tracing::debug!(%name, drawn, "incrementer updated");

    Ok(drawn.to_string())
}

/// `GET /inc/count/:name`
pub async fn count(State(state): State<AppState>, Params(name): Params<String>) -> ApiResult<String> {
    let total = state
        .metrics()
        .gather_families(&[INC_API])?
        .counter_value(INC_API, &name)?;
    Ok(format_fixed(total, 0))
}

/// `GET /inc/summary/:name`: median of all draws for `name`.
pub async fn summary(State(state): State<AppState>, Params(name): Params<String>) -> ApiResult<String> {
    let median = state
        .metrics()
        .gather_families(&[INC_API_SUM])?
        .summary_quantile(INC_API_SUM, &name, 0.5)?;
    Ok(format_fixed(median, 0))
}
