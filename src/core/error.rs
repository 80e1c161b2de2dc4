//! Typed error handling for leasedoc
//!
//! Store implementations return `anyhow::Result` and raise the typed errors
//! below; the HTTP layer recovers them through `From<anyhow::Error>` so that
//! clients receive a stable status code and error code.
//!
//! # Error Categories
//!
//! - [`TemplateError`]: template lookups and the one-active-template rule
//! - [`InvoiceError`]: invoice lookups
//! - [`ValidationError`]: request payload and parameter validation
//! - [`ConfigError`]: configuration loading
//!
//! # Example
//!
//! ```rust,ignore
//! match result {
//!     Err(DocsError::Template(TemplateError::ActiveConflict { active_id, .. })) => {
//!         println!("template {} is already active", active_id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//!     Ok(_) => {}
//! }
//! ```

use crate::entities::DocumentKind;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for leasedoc
#[derive(Debug, Error)]
pub enum DocsError {
    /// Template-related errors
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Invoice-related errors
    #[error(transparent)]
    Invoice(#[from] InvoiceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Anything else (storage failures, poisoned locks)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DocsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DocsError::Template(e) => e.status_code(),
            DocsError::Invoice(e) => e.status_code(),
            DocsError::Validation(_) => StatusCode::BAD_REQUEST,
            DocsError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DocsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DocsError::Template(e) => e.error_code(),
            DocsError::Invoice(e) => e.error_code(),
            DocsError::Validation(_) => "VALIDATION_ERROR",
            DocsError::Config(_) => "CONFIG_ERROR",
            DocsError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DocsError::Template(TemplateError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id.to_string() }))
            }
            DocsError::Template(TemplateError::ActiveConflict {
                organization_id,
                kind,
                active_id,
            }) => Some(serde_json::json!({
                "organization_id": organization_id.to_string(),
                "kind": kind,
                "active_id": active_id.to_string(),
            })),
            DocsError::Invoice(InvoiceError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            DocsError::Validation(ValidationError::Fields(errors)) => {
                serde_json::to_value(errors).ok().map(|fields| serde_json::json!({ "fields": fields }))
            }
            _ => None,
        }
    }
}

impl From<anyhow::Error> for DocsError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<DocsError>() {
            Ok(typed) => return typed,
            Err(err) => err,
        };
        let err = match err.downcast::<TemplateError>() {
            Ok(typed) => return typed.into(),
            Err(err) => err,
        };
        let err = match err.downcast::<InvoiceError>() {
            Ok(typed) => return typed.into(),
            Err(err) => err,
        };
        let err = match err.downcast::<ValidationError>() {
            Ok(typed) => return typed.into(),
            Err(err) => err,
        };
        match err.downcast::<ConfigError>() {
            Ok(typed) => typed.into(),
            Err(err) => DocsError::Internal(format!("{:#}", err)),
        }
    }
}

impl IntoResponse for DocsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Template Errors
// =============================================================================

/// Errors related to template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template was not found
    #[error("template with id '{id}' not found")]
    NotFound { id: Uuid },

    /// Another template is already active for the same organization and kind
    #[error(
        "template '{active_id}' is already the active {kind} template for organization '{organization_id}'"
    )]
    ActiveConflict {
        organization_id: Uuid,
        kind: DocumentKind,
        active_id: Uuid,
    },
}

impl TemplateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TemplateError::NotFound { .. } => StatusCode::NOT_FOUND,
            TemplateError::ActiveConflict { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TemplateError::NotFound { .. } => "TEMPLATE_NOT_FOUND",
            TemplateError::ActiveConflict { .. } => "TEMPLATE_ACTIVE_CONFLICT",
        }
    }
}

// =============================================================================
// Invoice Errors
// =============================================================================

/// Errors related to invoice operations
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Invoice was not found
    #[error("invoice with id '{id}' not found")]
    NotFound { id: u64 },
}

impl InvoiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            InvoiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            InvoiceError::NotFound { .. } => "INVOICE_NOT_FOUND",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to request validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field-level errors reported by `validator`
    #[error("validation failed: {0}")]
    Fields(#[from] validator::ValidationErrors),

    /// The request body could not be decoded
    #[error("invalid request body: {message}")]
    InvalidBody { message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file named in the configuration could not be read
    #[error("failed to read '{path}': {message}")]
    Read { path: String, message: String },

    /// The configuration could not be parsed
    #[error("failed to parse configuration: {message}")]
    Parse { message: String },
}
