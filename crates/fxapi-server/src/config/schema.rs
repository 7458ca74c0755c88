use serde::Deserialize;
use fxapi_core::error::{FxApiError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FxApiError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.metrics.validate()?;

        Ok(())
    }

    /// `host:port` string handed to the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Debug mode only raises framework log verbosity.
    #[serde(default = "default_debug")]
    pub debug: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: default_debug(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(FxApiError::Config("server.host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(FxApiError::Config("server.port must not be 0".into()));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}
fn default_debug() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Quantile objectives reported for every summary series.
    #[serde(default = "default_quantiles")]
    pub quantiles: Vec<f64>,

    /// Most recent observations kept per summary series for quantiles.
    #[serde(default = "default_summary_window")]
    pub summary_window: usize,

    /// Observations older than this drop out of the quantile window.
    #[serde(default = "default_summary_max_age_secs")]
    pub summary_max_age_secs: u64,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            quantiles: default_quantiles(),
            summary_window: default_summary_window(),
            summary_max_age_secs: default_summary_max_age_secs(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if let Some(q) = self.quantiles.iter().find(|q| !(**q > 0.0 && **q < 1.0)) {
            return Err(FxApiError::Config(format!(
                "metrics.quantiles must be in (0, 1), got {q}"
            )));
        }
        // `/inc/summary` reads the median back.
        if !self.quantiles.contains(&0.5) {
            return Err(FxApiError::Config("metrics.quantiles must include 0.5".into()));
        }
        if self.summary_window == 0 {
            return Err(FxApiError::Config("metrics.summary_window must not be 0".into()));
        }
        if self.summary_max_age_secs == 0 {
            return Err(FxApiError::Config(
                "metrics.summary_max_age_secs must not be 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_quantiles() -> Vec<f64> {
    vec![0.5, 0.9, 0.99]
}
fn default_summary_window() -> usize {
    1024
}
fn default_summary_max_age_secs() -> u64 {
    600
}
