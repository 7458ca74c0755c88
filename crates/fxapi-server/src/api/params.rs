//! Path parameter extraction and parsing.
//!
//! `Params` replaces axum's `Path` so that undecodable segments (e.g. `%FF`)
//! come back as a 500 like every other parameter error, not axum's 400.

use std::borrow::Cow;
use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, Uri},
};
use serde::de::DeserializeOwned;

use fxapi_core::error::{FxApiError, Result};

use crate::api::error::ApiError;

/// Path captures, rejected as `ApiError`.
pub struct Params<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Params<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> std::result::Result<Self, ApiError> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(v)) => Ok(Self(v)),
            Err(rejection) => Err(FxApiError::InvalidPath(rejection.body_text()).into()),
        }
    }
}

/// Parse a numeric path segment, naming the parameter on failure.
pub fn number<T: FromStr>(param: &'static str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| FxApiError::NotANumber { param })
}

pub fn non_negative(param: &'static str, v: i64) -> Result<i64> {
    if v < 0 {
        return Err(FxApiError::Negative { param });
    }
    Ok(v)
}

/// Percent-decoded bytes of the path after `prefix`, valid UTF-8 or not.
pub fn raw_tail<'a>(uri: &'a Uri, prefix: &str) -> Cow<'a, [u8]> {
    let tail = uri.path().strip_prefix(prefix).unwrap_or_default();
    urlencoding::decode_binary(tail.as_bytes())
}
