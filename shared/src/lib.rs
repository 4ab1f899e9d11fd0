//! Shared types and models for the Garden Planner
//!
//! This crate contains the domain models and the planting-date derivation
//! engine shared between the frontend (via WASM) and other components of the
//! system. It is a pure library: no I/O, no persistence, no async.

pub mod error;
pub mod models;
pub mod timing;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use timing::*;
pub use types::*;
pub use validation::*;
