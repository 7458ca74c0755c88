//! Minute-phase oscillator and curve sampling tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rand::rngs::StdRng;
use rand::SeedableRng;

use fxapi_core::curve::{format_fixed, minute_phase, CurveSpec};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn peaks_at_second_29() {
    assert!(close(minute_phase(29), 1.0));
    assert!(close(minute_phase(30), 1.0));
}

#[test]
fn edges_of_the_minute_are_one_thirtieth() {
    assert!(close(minute_phase(0), 1.0 / 30.0));
    assert!(close(minute_phase(59), 1.0 / 30.0));
}

#[test]
fn symmetric_around_half_minute() {
    for s in 0..30 {
        assert!(close(minute_phase(s), minute_phase(59 - s)), "second {s}");
    }
}

#[test]
fn rises_then_falls() {
    for s in 0..29 {
        assert!(minute_phase(s) < minute_phase(s + 1));
    }
    for s in 30..59 {
        assert!(minute_phase(s) > minute_phase(s + 1));
    }
}

#[test]
fn stays_in_unit_interval() {
    for s in 0..60 {
        let v = minute_phase(s);
        assert!(v > 0.0 && v <= 1.0, "second {s} -> {v}");
    }
}

#[test]
fn leap_second_bottoms_out_at_zero() {
    assert_eq!(minute_phase(60), 0.0);
    assert_eq!(minute_phase(75), 0.0);
}

#[test]
fn samples_respect_bound() {
    let mut rng = StdRng::seed_from_u64(7);
    let spec = CurveSpec { high: 100, std: 10 };
    for s in 0..60 {
        for _ in 0..50 {
            let v = spec.sample(s, &mut rng);
            assert!(v.abs() <= spec.bound(), "{v} exceeds {}", spec.bound());
        }
    }
}

#[test]
fn zero_noise_follows_the_wave() {
    let mut rng = StdRng::seed_from_u64(1);
    let spec = CurveSpec { high: 30, std: 0 };
    assert!(close(spec.sample(0, &mut rng), 1.0));
    assert!(close(spec.sample(29, &mut rng), 30.0));
}

#[test]
fn both_signs_of_noise_occur() {
    let mut rng = StdRng::seed_from_u64(42);
    let spec = CurveSpec { high: 0, std: 10 };
    let samples: Vec<f64> = (0..200).map(|_| spec.sample(0, &mut rng)).collect();
    assert!(samples.iter().any(|v| *v > 0.0));
    assert!(samples.iter().any(|v| *v < 0.0));
}

#[test]
fn fixed_formatting_uses_exact_decimals() {
    assert_eq!(format_fixed(3.14159, 2), "3.14");
    assert_eq!(format_fixed(-0.5, 3), "-0.500");
    assert_eq!(format_fixed(12.0, 0), "12");
}
