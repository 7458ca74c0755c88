//! Immutable metric snapshots and the label lookups built on them.
//!
//! A snapshot is taken fresh for every read and dropped afterwards; handlers
//! that echo state back write first, then gather, then scan for the series
//! they just touched.

use std::collections::BTreeMap;
use std::fmt::Write;

use fxapi_core::error::{FxApiError, Result};

use crate::obs::metrics::NAME_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Summary,
}

impl MetricKind {
    fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Summary => "summary",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesValue {
    Counter(f64),
    Summary {
        count: u64,
        sum: f64,
        /// `(quantile, value)` pairs in objective order.
        quantiles: Vec<(f64, f64)>,
    },
}

/// One label set of a family and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub labels: Vec<(String, String)>,
    pub value: SeriesValue,
}

impl Series {
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct MetricFamily {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub series: Vec<Series>,
}

/// Name-keyed view of every registered family.
#[derive(Debug, Clone, Default)]
pub struct MetricSnapshot {
    families: BTreeMap<String, MetricFamily>,
}

impl MetricSnapshot {
    pub fn from_families(families: impl IntoIterator<Item = MetricFamily>) -> Self {
        Self {
            families: families.into_iter().map(|f| (f.name.clone(), f)).collect(),
        }
    }

    pub fn family(&self, name: &str) -> Option<&MetricFamily> {
        self.families.get(name)
    }

    pub fn families(&self) -> impl Iterator<Item = &MetricFamily> {
        self.families.values()
    }

    /// First series of `family` whose `name` label equals `name`.
    pub fn find_series(&self, family: &str, name: &str) -> Result<&Series> {
        self.family(family)
            .and_then(|f| f.series.iter().find(|s| s.label(NAME_LABEL) == Some(name)))
            .ok_or_else(|| not_found(family, name))
    }

    /// Value of an unlabeled counter family.
    pub fn plain_counter(&self, family: &str) -> Result<f64> {
        let series = self
            .family(family)
            .and_then(|f| f.series.iter().find(|s| s.labels.is_empty()))
            .ok_or_else(|| not_found(family, ""))?;
        match series.value {
            SeriesValue::Counter(v) => Ok(v),
            SeriesValue::Summary { .. } => Err(not_found(family, "")),
        }
    }

    pub fn counter_value(&self, family: &str, name: &str) -> Result<f64> {
        match self.find_series(family, name)?.value {
            SeriesValue::Counter(v) => Ok(v),
            SeriesValue::Summary { .. } => Err(not_found(family, name)),
        }
    }

    /// Value of quantile `q` for the summary series labelled `name`.
    pub fn summary_quantile(&self, family: &str, name: &str, q: f64) -> Result<f64> {
        match &self.find_series(family, name)?.value {
            SeriesValue::Summary { quantiles, .. } => quantiles
                .iter()
                .find(|(objective, _)| *objective == q)
                .map(|(_, v)| *v)
                .ok_or_else(|| not_found(family, name)),
            SeriesValue::Counter(_) => Err(not_found(family, name)),
        }
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for family in self.families() {
            render_family(family, &mut out);
        }
        out
    }
}

fn not_found(family: &str, name: &str) -> FxApiError {
    FxApiError::MetricNotFound {
        family: family.to_string(),
        name: name.to_string(),
    }
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn fmt_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else if v.is_infinite() {
        if v > 0.0 { "+Inf".into() } else { "-Inf".into() }
    } else {
        v.to_string()
    }
}

fn label_block(labels: &[(String, String)], extra: Option<(&str, String)>) -> String {
    let mut parts: Vec<String> = labels
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect();
    if let Some((k, v)) = extra {
        parts.push(format!("{}=\"{}\"", k, v));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", parts.join(","))
    }
}

fn render_family(family: &MetricFamily, out: &mut String) {
    let name = &family.name;
    let _ = writeln!(out, "# HELP {} {}", name, escape_help(&family.help));
    let _ = writeln!(out, "# TYPE {} {}", name, family.kind.as_str());
    for s in &family.series {
        match &s.value {
            SeriesValue::Counter(v) => {
                let _ = writeln!(out, "{}{} {}", name, label_block(&s.labels, None), fmt_value(*v));
            }
            SeriesValue::Summary { count, sum, quantiles } => {
                for (q, v) in quantiles {
                    let labels = label_block(&s.labels, Some(("quantile", q.to_string())));
                    let _ = writeln!(out, "{}{} {}", name, labels, fmt_value(*v));
                }
                let labels = label_block(&s.labels, None);
                let _ = writeln!(out, "{}_sum{} {}", name, labels, fmt_value(*sum));
                let _ = writeln!(out, "{}_count{} {}", name, labels, count);
            }
        }
    }
}
