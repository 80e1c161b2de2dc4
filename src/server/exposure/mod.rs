//! API exposure modules
//!
//! Each exposure type consumes a `ServerHost` and produces a Router for that protocol.

pub mod rest;

pub use rest::RestExposure;
