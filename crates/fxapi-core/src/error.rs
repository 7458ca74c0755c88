//! Shared error type across fxapi crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// A path parameter could not be parsed or is out of range.
    BadParam,
    /// A metric series was not present in the gathered snapshot.
    NotFound,
    /// The metric registry could not produce a snapshot.
    MetricsUnavailable,
    /// Configuration rejected at startup.
    BadConfig,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadParam => "BAD_PARAM",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::MetricsUnavailable => "METRICS_UNAVAILABLE",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FxApiError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum FxApiError {
    #[error("{param} can not be converted to a number")]
    NotANumber { param: &'static str },
    #[error("{param} must not be negative")]
    Negative { param: &'static str },
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("empty range: {low} must be less than {high}")]
    EmptyRange { low: i64, high: i64 },
    #[error("counter cannot decrease (amount {0})")]
    CounterDecrease(f64),
    #[error("can not gather metrics: {0}")]
    Gather(String),
    #[error("can not find metric {family}{{name=\"{name}\"}}")]
    MetricNotFound { family: String, name: String },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl FxApiError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FxApiError::NotANumber { .. }
            | FxApiError::Negative { .. }
            | FxApiError::InvalidPath(_)
            | FxApiError::EmptyRange { .. }
            | FxApiError::CounterDecrease(_) => ClientCode::BadParam,
            FxApiError::MetricNotFound { .. } => ClientCode::NotFound,
            FxApiError::Gather(_) => ClientCode::MetricsUnavailable,
            FxApiError::Config(_) => ClientCode::BadConfig,
            FxApiError::Internal(_) => ClientCode::Internal,
        }
    }
}
