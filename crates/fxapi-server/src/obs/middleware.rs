use axum::{extract::{Request, State}, middleware::Next, response::Response};

use crate::app_state::AppState;

/// Count the request before it reaches its handler, so `/` includes itself.
pub async fn count_calls(State(state): State<AppState>, req: Request, next: Next) -> Response {
    state.metrics().record_call();
    next.run(req).await
}
