//! Minute-phase oscillator and the noisy curve built on top of it.
//!
//! The oscillator is a 60-second triangle wave: it rises from 1/30 at second 0
//! to 1.0 at second 29, then falls back to 1/30 at second 59.

use rand::Rng;

/// Half period of the triangle wave, in seconds.
const HALF_PERIOD: u32 = 30;

/// Oscillator value for a second-within-minute (`0..=59`).
///
/// Seconds past 59 (leap seconds) fold onto the falling edge and bottom out
/// at zero.
pub fn minute_phase(second: u32) -> f64 {
    let step = second + 1;
    let phase = if step > HALF_PERIOD {
        (2 * HALF_PERIOD + 1).saturating_sub(step)
    } else {
        step
    };
    f64::from(phase) / f64::from(HALF_PERIOD)
}

/// Parameters of a `/curve` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSpec {
    /// Peak value reached at the half-minute mark.
    pub high: i64,
    /// Maximum absolute noise added to or subtracted from the wave.
    pub std: i64,
}

impl CurveSpec {
    /// Upper bound on the magnitude of any sample.
    pub fn bound(&self) -> f64 {
        (self.high as f64).abs() + (self.std as f64).abs()
    }

    /// Draw one sample at `second`: `high * phase ± uniform[0,1) * std`,
    /// the sign picked with equal probability.
    pub fn sample<R: Rng + ?Sized>(&self, second: u32, rng: &mut R) -> f64 {
        let base = self.high as f64 * minute_phase(second);
        let noise = rng.gen::<f64>() * self.std as f64;
        if rng.gen_bool(0.5) {
            base - noise
        } else {
            base + noise
        }
    }
}

/// Fixed-point rendering with exactly `decimals` digits after the point.
pub fn format_fixed(value: f64, decimals: u8) -> String {
    format!("{:.*}", usize::from(decimals), value)
}
