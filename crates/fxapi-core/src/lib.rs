//! fxapi core: synthetic-data primitives and the shared error surface.
//!
//! This crate holds the pure pieces of the service: the minute-phase
//! oscillator behind `/curve`, bounded random draws, and the lorem sentence
//! generator. It carries no transport or runtime dependencies so the server
//! and tests can drive it with any `rand::Rng`.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `FxApiError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod curve;
pub mod error;
pub mod lorem;
pub mod random;

/// Shared result type.
pub use error::{Result, FxApiError};
