//! Registry, snapshot lookup, and exposition tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use fxapi_server::config::MetricsSection;
use fxapi_server::obs::metrics::{
    FxApiMetrics, SummaryVec, COUNTER_API, INC_API, INC_API_SUM, NAME_LABEL, TOTAL_API_CALLS,
};
use fxapi_server::obs::snapshot::SeriesValue;

#[test]
fn plain_counter_counts_calls() {
    let m = FxApiMetrics::default();
    assert_eq!(m.gather().unwrap().plain_counter(TOTAL_API_CALLS).unwrap(), 0.0);
    m.record_call();
    m.record_call();
    assert_eq!(m.gather().unwrap().plain_counter(TOTAL_API_CALLS).unwrap(), 2.0);
}

#[test]
fn counter_accumulates_per_name() {
    let m = FxApiMetrics::default();
    m.add_counter("foo", 5.0).unwrap();
    m.add_counter("foo", 7.0).unwrap();
    m.add_counter("bar", 1.5).unwrap();

    let snap = m.gather().unwrap();
    assert_eq!(snap.counter_value(COUNTER_API, "foo").unwrap(), 12.0);
    assert_eq!(snap.counter_value(COUNTER_API, "bar").unwrap(), 1.5);
}

#[test]
fn negative_amount_rejected_without_creating_series() {
    let m = FxApiMetrics::default();
    let err = m.add_counter("neg", -1.0).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_PARAM");

    let err = m
        .gather()
        .unwrap()
        .counter_value(COUNTER_API, "neg")
        .expect_err("series must not exist");
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
}

#[test]
fn increment_feeds_counter_and_summary() {
    let m = FxApiMetrics::default();
    for v in [1.0, 3.0, 2.0, 10.0, 4.0] {
        m.record_increment("job", v).unwrap();
    }

    let snap = m.gather().unwrap();
    assert_eq!(snap.counter_value(INC_API, "job").unwrap(), 20.0);
    assert_eq!(snap.summary_quantile(INC_API_SUM, "job", 0.5).unwrap(), 3.0);
    assert_eq!(snap.summary_quantile(INC_API_SUM, "job", 0.99).unwrap(), 10.0);
}

#[test]
fn unknown_name_is_not_found() {
    let m = FxApiMetrics::default();
    m.record_increment("known", 1.0).unwrap();

    let snap = m.gather().unwrap();
    let err = snap.counter_value(INC_API, "unknown").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
    assert!(snap.summary_quantile(INC_API_SUM, "unknown", 0.5).is_err());
    // quantile not among the objectives
    assert!(snap.summary_quantile(INC_API_SUM, "known", 0.75).is_err());
    // wrong family kind
    assert!(snap.counter_value(INC_API_SUM, "known").is_err());
}

#[test]
fn snapshot_is_point_in_time() {
    let m = FxApiMetrics::default();
    m.add_counter("x", 1.0).unwrap();
    let before = m.gather().unwrap();
    m.add_counter("x", 1.0).unwrap();
    assert_eq!(before.counter_value(COUNTER_API, "x").unwrap(), 1.0);
    assert_eq!(m.gather().unwrap().counter_value(COUNTER_API, "x").unwrap(), 2.0);
}

#[test]
fn exposition_lists_all_families() {
    let m = FxApiMetrics::default();
    m.record_call();
    m.add_counter("a\"b", 2.0).unwrap();
    m.record_increment("job", 4.0).unwrap();

    let text = m.render().unwrap();
    assert!(text.contains("# TYPE fxapi_total_api_calls counter\n"));
    assert!(text.contains("\nfxapi_total_api_calls 1\n"));
    assert!(text.contains("# TYPE fxapi_counter_api counter\n"));
    assert!(text.contains("fxapi_counter_api{name=\"a\\\"b\"} 2\n"));
    assert!(text.contains("# TYPE fxapi_inc_api counter\n"));
    assert!(text.contains("fxapi_inc_api{name=\"job\"} 4\n"));
    assert!(text.contains("# TYPE fxapi_inc_api_sum summary\n"));
    assert!(text.contains("fxapi_inc_api_sum{name=\"job\",quantile=\"0.5\"} 4\n"));
    assert!(text.contains("fxapi_inc_api_sum_sum{name=\"job\"} 4\n"));
    assert!(text.contains("fxapi_inc_api_sum_count{name=\"job\"} 1\n"));
}

#[test]
fn concurrent_writers_are_not_lost() {
    let m = Arc::new(FxApiMetrics::default());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let m = Arc::clone(&m);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    m.add_counter("shared", 1.0).unwrap();
                    m.record_increment("shared", 1.0).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let snap = m.gather().unwrap();
    assert_eq!(snap.counter_value(COUNTER_API, "shared").unwrap(), 8000.0);
    assert_eq!(snap.counter_value(INC_API, "shared").unwrap(), 8000.0);
}

#[test]
fn summary_window_stays_bounded() {
    let summary = SummaryVec::new(4, Duration::from_secs(600));
    let labels = [(NAME_LABEL, "job")];
    for v in 0..10_000 {
        summary.observe(&labels, f64::from(v)).unwrap();
        assert!(summary.window_len(&labels).unwrap() <= 4);
    }
    assert_eq!(summary.window_len(&labels), Some(4));
    assert_eq!(summary.window_len(&[(NAME_LABEL, "other")]), None);
}

#[test]
fn summary_quantiles_cover_recent_window_but_totals_cover_all() {
    let cfg = MetricsSection {
        summary_window: 4,
        ..MetricsSection::default()
    };
    let m = FxApiMetrics::new(&cfg);
    for v in [100.0, 100.0, 1.0, 2.0, 3.0, 4.0] {
        m.record_increment("job", v).unwrap();
    }

    let snap = m.gather().unwrap();
    // window holds [1, 2, 3, 4]
    assert_eq!(snap.summary_quantile(INC_API_SUM, "job", 0.5).unwrap(), 2.0);
    assert_eq!(snap.summary_quantile(INC_API_SUM, "job", 0.99).unwrap(), 4.0);
    match &snap.find_series(INC_API_SUM, "job").unwrap().value {
        SeriesValue::Summary { count, sum, .. } => {
            assert_eq!(*count, 6);
            assert_eq!(*sum, 210.0);
        }
        other => panic!("unexpected series value {other:?}"),
    }
}

#[test]
fn old_observations_age_out_of_the_window() {
    let summary = SummaryVec::new(100, Duration::from_millis(20));
    let labels = [(NAME_LABEL, "job")];
    summary.observe(&labels, 1.0).unwrap();
    summary.observe(&labels, 2.0).unwrap();
    std::thread::sleep(Duration::from_millis(60));
    summary.observe(&labels, 3.0).unwrap();
    assert_eq!(summary.window_len(&labels), Some(1));
}

#[test]
fn gather_families_reads_only_what_is_asked() {
    let m = FxApiMetrics::default();
    m.add_counter("foo", 1.0).unwrap();
    m.record_increment("job", 1.0).unwrap();

    let snap = m.gather_families(&[COUNTER_API]).unwrap();
    assert_eq!(snap.counter_value(COUNTER_API, "foo").unwrap(), 1.0);
    assert!(snap.family(INC_API_SUM).is_none());
    assert!(snap.family(TOTAL_API_CALLS).is_none());
    assert_eq!(snap.families().count(), 1);

    let none = m.gather_families(&["no_such_family"]).unwrap();
    assert_eq!(none.families().count(), 0);
}
