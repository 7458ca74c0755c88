//! Server config loader (strict parsing) and environment/flag overrides.

pub mod schema;

use std::fs;

use fxapi_core::error::{FxApiError, Result};

pub use schema::{MetricsSection, ServerConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FxApiError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| FxApiError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Values that take precedence over the file (environment, then flags).
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub port: Option<u16>,
    pub debug: Option<bool>,
}

/// Resolve the effective config: defaults, then the optional file, then overrides.
pub fn resolve(path: Option<&str>, overrides: Overrides) -> Result<ServerConfig> {
    let mut cfg = match path {
        Some(p) => load_from_file(p)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = overrides.port {
        cfg.server.port = port;
    }
    if let Some(debug) = overrides.debug {
        cfg.server.debug = debug;
    }
    cfg.validate()?;
    Ok(cfg)
}
