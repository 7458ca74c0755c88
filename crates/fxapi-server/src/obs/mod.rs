//! Lightweight in-process metrics.
//!
//! Families are stored as atomics/sample vectors in `metrics`, read back through
//! `snapshot`, and rendered by the `/metrics` handler. `middleware` counts every
//! inbound request.

pub mod metrics;
pub mod middleware;
pub mod snapshot;

pub use metrics::FxApiMetrics;
pub use snapshot::MetricSnapshot;
