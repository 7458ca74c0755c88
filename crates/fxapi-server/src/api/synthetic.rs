//! Stateless synthetic-data endpoints.

use axum::{
    http::{header, Uri},
    response::IntoResponse,
};
use chrono::{Timelike, Utc};

use fxapi_core::curve::{format_fixed, CurveSpec};
use fxapi_core::lorem;
use fxapi_core::random::uniform_int;

use crate::api::error::ApiResult;
use crate::api::params::{self, Params};

/// `GET /curve/:high/:std/:dec`
pub async fn curve(Params((high, std, dec)): Params<(String, String, String)>) -> ApiResult<String> {
    let spec = CurveSpec {
        high: params::number("high", &high)?,
        std: params::number("std", &std)?,
    };
    let dec: u8 = params::number("dec", &dec)?;

    let value = spec.sample(Utc::now().second(), &mut rand::thread_rng());
    Ok(format_fixed(value, dec))
}

/// `GET /epoch`
pub async fn epoch() -> String {
    Utc::now().timestamp().to_string()
}

/// `GET /second`
pub async fn second() -> String {
    // chrono reports a leap second as 59 with nanos >= 1e9
    Utc::now().second().to_string()
}

/// `GET /lorem`
pub async fn lorem() -> String {
    lorem::default_sentence(&mut rand::thread_rng())
}

/// `GET /fixed-number/:num`
pub async fn fixed_number(uri: Uri) -> impl IntoResponse {
    echo(&uri, "/fixed-number/")
}

/// `GET /metric/:data`
pub async fn metric(uri: Uri) -> impl IntoResponse {
    echo(&uri, "/metric/")
}

/// Echo the decoded segment byte for byte; it need not be UTF-8.
fn echo(uri: &Uri, prefix: &str) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        params::raw_tail(uri, prefix).into_owned(),
    )
}

/// `GET /random-int/:from/:to`
pub async fn random_int(Params((from, to)): Params<(String, String)>) -> ApiResult<String> {
    let from: i64 = params::number("from", &from)?;
    let to: i64 = params::number("to", &to)?;
    Ok(uniform_int(&mut rand::thread_rng(), from, to)?.to_string())
}
