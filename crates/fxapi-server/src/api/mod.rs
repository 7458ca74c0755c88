//! Request handlers, one per endpoint.
//!
//! Handlers are stateless glue: they parse path segments, call into
//! `fxapi_core` or the metric registry, and render plain text (JSON for `/`).

pub mod counter;
pub mod error;
pub mod inc;
pub mod params;
pub mod root;
pub mod synthetic;

pub use error::{ApiError, ApiResult};
