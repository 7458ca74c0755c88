//! fxapi server library entry.
//!
//! This crate wires config, the metric registry, request handlers, and the
//! router into the synthetic-data HTTP service. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod cli;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
