//! Shared application state for the fxapi server.
//!
//! The metric registry and the process identity live here and are created
//! exactly once per `AppState`; handlers receive them through axum `State`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::obs::FxApiMetrics;

/// Identifies one running process in `/` responses.
#[derive(Debug, Clone)]
pub struct InstanceIdentity {
    pub uuid: Uuid,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
}

impl InstanceIdentity {
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            version: env!("CARGO_PKG_VERSION"),
            started_at: Utc::now(),
        }
    }
}

impl Default for InstanceIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: FxApiMetrics,
    instance: InstanceIdentity,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        let metrics = FxApiMetrics::new(&cfg.metrics);
        let instance = InstanceIdentity::new();
        tracing::debug!(instance = %instance.uuid, "application state created");
        Self {
            inner: Arc::new(AppStateInner { cfg, metrics, instance }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &FxApiMetrics {
        &self.inner.metrics
    }

    pub fn instance(&self) -> &InstanceIdentity {
        &self.inner.instance
    }
}
