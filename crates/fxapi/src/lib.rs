//! Top-level facade crate for fxapi.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use fxapi_core::*;
}

pub mod server {
    pub use fxapi_server::*;
}
