// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use olympiad_cms_domain::DomainError;
use olympiad_cms_persistence::PersistenceError;

use crate::{
    ApiError, AuthError, CreatedResponse, STORAGE_FAILURE_MESSAGE, SessionStatusResponse,
    SuccessResponse, translate_domain_error, translate_persistence_error,
};

#[test]
fn test_missing_field_translates_to_invalid_input() {
    let err = translate_domain_error(DomainError::MissingField { field: "title" });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("title"),
            message: String::from("Field 'title' is required"),
        }
    );
}

#[test]
fn test_invalid_date_translates_to_invalid_input() {
    let err = translate_domain_error(DomainError::InvalidDate {
        field: "date",
        value: String::from("tomorrow"),
    });

    match err {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "date");
            assert!(message.contains("tomorrow"));
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_persistence_errors_are_not_leaked() {
    let err = translate_persistence_error(&PersistenceError::DatabaseError(String::from(
        "disk I/O error at page 12",
    )));

    assert_eq!(
        err,
        ApiError::Internal {
            message: String::from(STORAGE_FAILURE_MESSAGE)
        }
    );
}

#[test]
fn test_auth_errors_convert_to_api_errors() {
    assert_eq!(
        ApiError::from(AuthError::SessionRequired),
        ApiError::AuthenticationFailed {
            reason: String::from("Unauthorized")
        }
    );
    assert!(matches!(
        ApiError::from(AuthError::StorageFailure {
            message: String::from("locked")
        }),
        ApiError::Internal { .. }
    ));
}

#[test]
fn test_response_shapes() {
    assert_eq!(
        serde_json::to_value(SuccessResponse::ok()).unwrap(),
        serde_json::json!({ "success": true })
    );
    assert_eq!(
        serde_json::to_value(CreatedResponse::new(5)).unwrap(),
        serde_json::json!({ "id": 5, "success": true })
    );
    assert_eq!(
        serde_json::to_value(SessionStatusResponse {
            authenticated: false,
            username: None,
        })
        .unwrap(),
        serde_json::json!({ "authenticated": false })
    );
}
