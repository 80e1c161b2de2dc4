//! Template rendering
//!
//! A pure, synchronous string transformation: no I/O and no shared state.
//! Presentation assets (fallback templates, preview page) live in
//! [`crate::documents`].

pub mod engine;
pub mod escape;

pub use engine::{Renderer, placeholders, render_with_data, resolve_expression};
pub use escape::{EscapeMode, escape_html};
