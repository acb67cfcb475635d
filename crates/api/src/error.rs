// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use olympiad_cms_domain::DomainError;
use olympiad_cms_persistence::PersistenceError;
use tracing::error;

/// Message returned to clients for any storage failure.
pub const STORAGE_FAILURE_MESSAGE: &str = "Database error";

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials were rejected.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// No valid session accompanies the request.
    SessionRequired,
    /// Storage could not be consulted.
    StorageFailure {
        /// The underlying persistence error.
        message: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::SessionRequired => write!(f, "A valid admin session is required"),
            Self::StorageFailure { message } => {
                write!(f, "Authentication storage failure: {message}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl From<PersistenceError> for AuthError {
    fn from(err: PersistenceError) -> Self {
        Self::StorageFailure {
            message: err.to_string(),
        }
    }
}

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API contract.
/// Each variant maps to exactly one HTTP status in the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed or no session was presented.
    AuthenticationFailed {
        /// The client-facing reason.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    ///
    /// `message` is safe to show to clients; details are logged where the
    /// error is created.
    Internal {
        /// The client-facing message.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::SessionRequired => Self::AuthenticationFailed {
                reason: String::from("Unauthorized"),
            },
            AuthError::StorageFailure { message } => {
                error!("Authentication storage failure: {}", message);
                Self::Internal {
                    message: String::from(STORAGE_FAILURE_MESSAGE),
                }
            }
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingField { field } | DomainError::InvalidDate { field, .. } => {
            ApiError::InvalidInput {
                field: field.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Translates a persistence error into an API error.
///
/// The underlying error is logged; clients only see a generic storage failure.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    error!("Storage failure: {}", err);
    ApiError::Internal {
        message: String::from(STORAGE_FAILURE_MESSAGE),
    }
}
