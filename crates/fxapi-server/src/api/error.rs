//! HTTP rendering of `FxApiError`.
//!
//! Every failure is a 500 with a plain-text body, including a missing metric
//! series; clients of this service only ever see 200 or 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use fxapi_core::error::FxApiError;

#[derive(Debug)]
pub struct ApiError(pub FxApiError);

impl From<FxApiError> for ApiError {
    fn from(e: FxApiError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        tracing::error!(code = code.as_str(), error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
