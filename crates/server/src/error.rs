// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use olympiad_cms_api::ApiError;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::uploads::UploadError;

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Client-facing error message.
    pub error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error message.
    pub message: String,
}

impl HttpError {
    /// 404 with the given message.
    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.to_string(),
        }
    }

    /// 401 for requests without a valid admin session.
    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Unauthorized"),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { reason } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: reason,
            },
            ApiError::InvalidInput { message, .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            ApiError::ResourceNotFound { message, .. } => Self {
                status: StatusCode::NOT_FOUND,
                message,
            },
            ApiError::Internal { message } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            },
        }
    }
}

impl From<UploadError> for HttpError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Multipart(e) => Self {
                status: e.status(),
                message: e.body_text(),
            },
            UploadError::Io(e) => {
                error!(error = %e, "Failed to write upload");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("Failed to store upload"),
                }
            }
        }
    }
}
