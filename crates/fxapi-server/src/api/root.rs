use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::app_state::AppState;
use crate::obs::metrics::TOTAL_API_CALLS;

/// `GET /`: instance and call-count summary.
pub async fn index(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let calls = state
        .metrics()
        .gather_families(&[TOTAL_API_CALLS])?
        .plain_counter(TOTAL_API_CALLS)?;
    let instance = state.instance();

    Ok(Json(json!({
        "message": "ok",
        "time": Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true),
        "calls": calls as u64,
        "uuid_call": Uuid::new_v4().to_string(),
        "uuid_instance": instance.uuid.to_string(),
        "version": instance.version,
    })))
}
