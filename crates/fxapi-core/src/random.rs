//! Bounded uniform draws.

use rand::Rng;

use crate::error::{FxApiError, Result};

/// Uniform integer in `[low, high)`.
///
/// An empty range is an error rather than a panic inside the RNG.
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> Result<i64> {
    if low >= high {
        return Err(FxApiError::EmptyRange { low, high });
    }
    Ok(rng.gen_range(low..high))
}
