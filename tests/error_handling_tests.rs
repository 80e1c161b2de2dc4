//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes and error codes
//! - Error responses are properly formatted
//! - Typed errors survive the trip through `anyhow`

use axum::http::StatusCode;
use axum::response::IntoResponse;
use leasedoc::core::error::ConfigError;
use leasedoc::prelude::*;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_template_not_found_returns_404() {
        let err = DocsError::Template(TemplateError::NotFound { id: Uuid::new_v4() });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "TEMPLATE_NOT_FOUND");
    }

    #[test]
    fn test_active_conflict_returns_409() {
        let err = DocsError::Template(TemplateError::ActiveConflict {
            organization_id: Uuid::new_v4(),
            kind: DocumentKind::Invoice,
            active_id: Uuid::new_v4(),
        });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), "TEMPLATE_ACTIVE_CONFLICT");
    }

    #[test]
    fn test_invoice_not_found_returns_404() {
        let err = DocsError::Invoice(InvoiceError::NotFound { id: 7 });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "INVOICE_NOT_FOUND");
    }

    #[test]
    fn test_invalid_body_returns_400() {
        let err = DocsError::Validation(ValidationError::InvalidBody {
            message: "missing field `content`".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_config_and_internal_return_500() {
        let config = DocsError::Config(ConfigError::Parse {
            message: "bad yaml".to_string(),
        });
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = DocsError::Internal("lock poisoned".to_string());
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.error_code(), "INTERNAL_ERROR");
    }
}

// =============================================================================
// Error Response Tests
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_conflict_response_details() {
        let organization_id = Uuid::new_v4();
        let active_id = Uuid::new_v4();
        let err = DocsError::Template(TemplateError::ActiveConflict {
            organization_id,
            kind: DocumentKind::Receipt,
            active_id,
        });

        let response = err.to_response();

        assert_eq!(response.code, "TEMPLATE_ACTIVE_CONFLICT");
        assert!(response.message.contains(&active_id.to_string()));
        let details = response.details.unwrap();
        assert_eq!(details["kind"], "receipt");
        assert_eq!(details["organization_id"], organization_id.to_string());
        assert_eq!(details["active_id"], active_id.to_string());
    }

    #[test]
    fn test_invoice_not_found_details() {
        let response = DocsError::Invoice(InvoiceError::NotFound { id: 42 }).to_response();
        assert_eq!(response.details.unwrap()["id"], 42);
    }

    #[test]
    fn test_internal_error_has_no_details() {
        let response = DocsError::Internal("boom".to_string()).to_response();
        assert!(response.details.is_none());
    }

    #[test]
    fn test_into_response_status() {
        let response = DocsError::Invoice(InvoiceError::NotFound { id: 1 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = DocsError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// anyhow Conversion Tests
// =============================================================================

mod conversion_tests {
    use super::*;

    #[test]
    fn test_typed_errors_are_recovered() {
        let err: anyhow::Error = TemplateError::NotFound { id: Uuid::nil() }.into();
        assert!(matches!(
            DocsError::from(err),
            DocsError::Template(TemplateError::NotFound { .. })
        ));

        let err: anyhow::Error = InvoiceError::NotFound { id: 3 }.into();
        assert!(matches!(
            DocsError::from(err),
            DocsError::Invoice(InvoiceError::NotFound { id: 3 })
        ));

        let err: anyhow::Error = ConfigError::Parse {
            message: "x".to_string(),
        }
        .into();
        assert!(matches!(DocsError::from(err), DocsError::Config(_)));
    }

    #[test]
    fn test_untyped_errors_become_internal() {
        let err = anyhow::anyhow!("Failed to acquire write lock").context("archiving receipt");
        match DocsError::from(err) {
            DocsError::Internal(message) => {
                assert!(message.contains("archiving receipt"));
                assert!(message.contains("Failed to acquire write lock"));
            }
            other => panic!("expected internal error, got {other:?}"),
        }
    }
}
