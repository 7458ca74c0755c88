//! In-process metric registry for fxapi.
//!
//! Counter and summary families with dynamic labels backed by `DashMap`.
//! Labels are flattened into sorted key vectors to keep deterministic ordering.
//! Counters hold an `f64` in an `AtomicU64` and add with a CAS loop. Summaries
//! keep a bounded, age-limited window of recent observations for quantiles
//! (like client_golang's max-age objectives) plus running `_sum`/`_count`.
//! Series are never removed and counts never decrease.

use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use fxapi_core::error::{FxApiError, Result};

use crate::config::MetricsSection;
use crate::obs::snapshot::{MetricFamily, MetricKind, MetricSnapshot, Series, SeriesValue};

pub const TOTAL_API_CALLS: &str = "fxapi_total_api_calls";
pub const COUNTER_API: &str = "fxapi_counter_api";
pub const INC_API: &str = "fxapi_inc_api";
pub const INC_API_SUM: &str = "fxapi_inc_api_sum";

const ALL_FAMILIES: [&str; 4] = [TOTAL_API_CALLS, COUNTER_API, INC_API, INC_API_SUM];

/// Label key shared by every labeled family.
pub const NAME_LABEL: &str = "name";

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

/// Monotonic `f64` counter.
#[derive(Default)]
pub struct Counter {
    bits: AtomicU64,
}

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.add_unchecked(1.0);
    }

    /// Add a non-negative, finite amount.
    pub fn add(&self, v: f64) -> Result<()> {
        check_amount(v)?;
        self.add_unchecked(v);
        Ok(())
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    fn add_unchecked(&self, v: f64) {
        let mut cur = self.bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(cur) + v).to_bits();
            match self
                .bits
                .compare_exchange_weak(cur, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return,
                Err(actual) => cur = actual,
            }
        }
    }
}

fn check_amount(v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(FxApiError::CounterDecrease(v))
    }
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, Counter>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.map.entry(label_key(labels)).or_insert_with(Default::default).inc();
    }

    /// Add an arbitrary non-negative value. The series is created on first write.
    pub fn add(&self, labels: &[(&str, &str)], v: f64) -> Result<()> {
        // Reject before the series is created so a bad write leaves no trace.
        check_amount(v)?;
        self.map.entry(label_key(labels)).or_insert_with(Default::default).add(v)
    }

    fn collect(&self) -> Vec<Series> {
        let mut out: Vec<Series> = self
            .map
            .iter()
            .map(|r| Series {
                labels: r.key().clone(),
                value: SeriesValue::Counter(r.value().get()),
            })
            .collect();
        out.sort_by(|a, b| a.labels.cmp(&b.labels));
        out
    }
}

struct SummaryState {
    /// `(recorded_at, value)`, oldest first, at most `window` entries.
    window: VecDeque<(Instant, f64)>,
    count: u64,
    sum: f64,
}

impl SummaryState {
    fn new(capacity: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(capacity),
            count: 0,
            sum: 0.0,
        }
    }

    fn expire(&mut self, now: Instant, max_age: Duration) {
        while let Some((at, _)) = self.window.front() {
            if now.duration_since(*at) < max_age {
                break;
            }
            self.window.pop_front();
        }
    }
}

/// Summary family. `_sum`/`_count` cover every observation; quantiles cover
/// the last `window` observations younger than `max_age`.
pub struct SummaryVec {
    map: DashMap<LabelKey, Mutex<SummaryState>>,
    window: usize,
    max_age: Duration,
}

impl SummaryVec {
    pub fn new(window: usize, max_age: Duration) -> Self {
        Self {
            map: DashMap::new(),
            window: window.max(1),
            max_age,
        }
    }

    /// Record one observation. The series is created on first write.
    pub fn observe(&self, labels: &[(&str, &str)], v: f64) -> Result<()> {
        let entry = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| Mutex::new(SummaryState::new(self.window)));
        let mut state = entry
            .lock()
            .map_err(|_| FxApiError::Internal("summary series lock poisoned".into()))?;
        let now = Instant::now();
        state.expire(now, self.max_age);
        if state.window.len() == self.window {
            state.window.pop_front();
        }
        state.window.push_back((now, v));
        state.count += 1;
        state.sum += v;
        Ok(())
    }

    /// Observations currently held for quantiles (`None` if the series does not exist).
    pub fn window_len(&self, labels: &[(&str, &str)]) -> Option<usize> {
        let entry = self.map.get(&label_key(labels))?;
        let len = entry.lock().map(|s| s.window.len()).ok();
        len
    }

    fn collect(&self, objectives: &[f64]) -> Result<Vec<Series>> {
        let now = Instant::now();
        let mut out = Vec::with_capacity(self.map.len());
        for r in self.map.iter() {
            let (mut sorted, count, sum) = {
                let mut state = r
                    .value()
                    .lock()
                    .map_err(|_| FxApiError::Gather("summary series lock poisoned".into()))?;
                state.expire(now, self.max_age);
                let values: Vec<f64> = state.window.iter().map(|(_, v)| *v).collect();
                (values, state.count, state.sum)
            };
            sorted.sort_by(|a, b| a.total_cmp(b));
            let quantiles = objectives
                .iter()
                .map(|&q| (q, quantile(&sorted, q)))
                .collect();
            out.push(Series {
                labels: r.key().clone(),
                value: SeriesValue::Summary {
                    count,
                    sum,
                    quantiles,
                },
            });
        }
        out.sort_by(|a, b| a.labels.cmp(&b.labels));
        Ok(out)
    }
}

/// Nearest-rank quantile over sorted samples (`NaN` when empty).
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let rank = (q * sorted.len() as f64).ceil() as usize;
    sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
}

/// The service's metric families. Owned by `AppState`; one per process.
pub struct FxApiMetrics {
    pub total_calls: Counter,
    pub counter_api: CounterVec,
    pub inc_api: CounterVec,
    pub inc_api_sum: SummaryVec,
    objectives: Vec<f64>,
}

impl Default for FxApiMetrics {
    fn default() -> Self {
        Self::new(&MetricsSection::default())
    }
}

impl FxApiMetrics {
    pub fn new(cfg: &MetricsSection) -> Self {
        Self {
            total_calls: Counter::default(),
            counter_api: CounterVec::default(),
            inc_api: CounterVec::default(),
            inc_api_sum: SummaryVec::new(
                cfg.summary_window,
                Duration::from_secs(cfg.summary_max_age_secs),
            ),
            objectives: cfg.quantiles.clone(),
        }
    }

    /// Count one inbound request.
    pub fn record_call(&self) {
        self.total_calls.inc();
    }

    /// Add to the `/counter` family.
    pub fn add_counter(&self, name: &str, v: f64) -> Result<()> {
        self.counter_api.add(&[(NAME_LABEL, name)], v)
    }

    /// Record an `/inc/update` draw into both the counter and the summary family.
    pub fn record_increment(&self, name: &str, v: f64) -> Result<()> {
        let labels = [(NAME_LABEL, name)];
        self.inc_api.add(&labels, v)?;
        self.inc_api_sum.observe(&labels, v)
    }

    /// Point-in-time read of every family.
    pub fn gather(&self) -> Result<MetricSnapshot> {
        self.gather_families(&ALL_FAMILIES)
    }

    /// Point-in-time read of the named families only; unknown names are skipped.
    ///
    /// Counter read-backs use this so they never pay for summary quantiles.
    pub fn gather_families(&self, names: &[&str]) -> Result<MetricSnapshot> {
        let mut families = Vec::with_capacity(names.len());
        for name in names {
            if let Some(family) = self.collect_family(name)? {
                families.push(family);
            }
        }
        Ok(MetricSnapshot::from_families(families))
    }

    fn collect_family(&self, name: &str) -> Result<Option<MetricFamily>> {
        let (help, kind, series) = match name {
            TOTAL_API_CALLS => (
                "Total number api calls.",
                MetricKind::Counter,
                vec![Series {
                    labels: Vec::new(),
                    value: SeriesValue::Counter(self.total_calls.get()),
                }],
            ),
            COUNTER_API => ("API counter.", MetricKind::Counter, self.counter_api.collect()),
            INC_API => ("API incrementer.", MetricKind::Counter, self.inc_api.collect()),
            INC_API_SUM => (
                "incrementer API summaries.",
                MetricKind::Summary,
                self.inc_api_sum.collect(&self.objectives)?,
            ),
            _ => return Ok(None),
        };
        Ok(Some(MetricFamily {
            name: name.to_string(),
            help: help.to_string(),
            kind,
            series,
        }))
    }

    /// Render all families in Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        Ok(self.gather()?.render())
    }
}
