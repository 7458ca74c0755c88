use axum::extract::State;

use fxapi_core::curve::format_fixed;

use crate::api::error::ApiResult;
use crate::api::params::{self, Params};
use crate::app_state::AppState;
use crate::obs::metrics::COUNTER_API;

/// `GET /counter/:name/:add`: add, then read the new total back from a snapshot.
pub async fn add(
    State(state): State<AppState>,
    Params((name, add)): Params<(String, String)>,
) -> ApiResult<String> {
    let add = params::non_negative("add", params::number("add", &add)?)?;

    state.metrics().add_counter(&name, add as f64)?;
    let total = state
        .metrics()
        .gather_families(&[COUNTER_API])?
        .counter_value(COUNTER_API, &name)?;

    Ok(format_fixed(total, 0))
}
