// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cookie-borne sessions at the server boundary.
//!
//! The session token travels in the `olympiad_session` cookie. This module
//! reads it from requests, writes it into responses and provides the
//! [`SessionAdmin`] extractor that gates every admin-only route.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use olympiad_cms_api::{ApiError, AuthenticatedAdmin, AuthenticationService};
use tracing::debug;

use crate::AppState;
use crate::error::HttpError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "olympiad_session";

/// Reads the session token from the request's `Cookie` headers.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` value that stores `token` for `max_age_seconds`.
pub fn session_cookie(token: &str, max_age_seconds: i64, secure: bool) -> String {
    let secure: &str = if secure { "; Secure" } else { "" };
    format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_seconds}{secure}"
    )
}

/// `Set-Cookie` value that makes the browser drop the session cookie.
pub fn expired_session_cookie(secure: bool) -> String {
    session_cookie("", 0, secure)
}

/// Extractor for the logged-in admin.
///
/// ```ignore
/// async fn my_handler(SessionAdmin(admin): SessionAdmin) -> Result<Json<T>, HttpError> {
///     // admin: AuthenticatedAdmin
/// }
/// ```
///
/// # Errors
///
/// Rejects with 401 `{"error": "Unauthorized"}` when the cookie is missing,
/// the session is unknown or expired, or its admin no longer exists.
pub struct SessionAdmin(pub AuthenticatedAdmin);

impl FromRequestParts<AppState> for SessionAdmin {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: String = session_token(&parts.headers).ok_or_else(|| {
            debug!("Missing session cookie");
            HttpError::unauthorized()
        })?;

        let admin: AuthenticatedAdmin = AuthenticationService::validate_session(
            &mut *state.persistence.lock().await,
            &state.sessions,
            &token,
        )
        .map_err(|e| HttpError::from(ApiError::from(e)))?;

        debug!(username = %admin.username, "Session validated");

        Ok(Self(admin))
    }
}
