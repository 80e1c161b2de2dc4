//! HTTP server for template management and document rendering
//!
//! `ServerBuilder` wires the services into a `ServerHost` and exposes it over REST:
//! - Template CRUD, activation and preview
//! - Invoice CRUD and status changes
//! - Rendered invoice and receipt documents

pub mod builder;
pub mod exposure;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use host::ServerHost;
