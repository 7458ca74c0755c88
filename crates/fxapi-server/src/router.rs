//! Axum router wiring.
//!
//! Every route passes through the call counter and the request trace layer.

use axum::{middleware, routing::get, Router};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{api, app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root::index))
        .route("/inc/update/:name/:min/:max", get(api::inc::update))
        .route("/inc/count/:name", get(api::inc::count))
        .route("/inc/summary/:name", get(api::inc::summary))
        .route("/counter/:name/:add", get(api::counter::add))
        .route("/curve/:high/:std/:dec", get(api::synthetic::curve))
        .route("/epoch", get(api::synthetic::epoch))
        .route("/second", get(api::synthetic::second))
        .route("/lorem", get(api::synthetic::lorem))
        .route("/fixed-number/:num", get(api::synthetic::fixed_number))
        .route("/metric/:data", get(api::synthetic::metric))
        .route("/random-int/:from/:to", get(api::synthetic::random_int))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn_with_state(state.clone(), obs::middleware::count_calls))
        .layer(TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO)))
        .with_state(state)
}
