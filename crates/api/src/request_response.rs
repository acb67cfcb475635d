// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Create requests carry every field as `Option<String>` so that absent and
//! blank inputs reach validation and produce a field-specific 400 instead of
//! a deserialization failure.

// ========================================================================
// Authentication
// ========================================================================

/// API request to log in and create a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// The admin username.
    pub username: String,
    /// The admin password.
    pub password: String,
}

/// Result of a successful login.
///
/// Not an HTTP body: the server turns `session_token` into a cookie and
/// replies with a [`SuccessResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    /// The opaque session token.
    pub session_token: String,
    /// The admin that logged in.
    pub username: String,
}

/// API response describing the caller's session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionStatusResponse {
    /// Whether the request carried a valid admin session.
    pub authenticated: bool,
    /// The admin username, when authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

// ========================================================================
// Generic responses
// ========================================================================

/// API response for operations that only report success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SuccessResponse {
    /// Always `true`; failures are reported as errors.
    pub success: bool,
}

impl SuccessResponse {
    /// The success response.
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// API response for a successful create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreatedResponse {
    /// The id of the new row.
    pub id: i64,
    /// Always `true`.
    pub success: bool,
}

impl CreatedResponse {
    /// Builds the response for a newly inserted row.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { id, success: true }
    }
}

// ========================================================================
// Content
// ========================================================================

/// API request to create a blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    /// Public path of an already-stored image.
    pub image_url: Option<String>,
}

/// API request to create an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CreateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub event_date: Option<String>,
    pub event_type: Option<String>,
    pub image_url: Option<String>,
    pub certificate_url: Option<String>,
}

/// API request to create a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CreateResourceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub resource_type: Option<String>,
    pub file_url: Option<String>,
}

/// API request to create an olympiad date.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CreateOlympiadDateRequest {
    pub title: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub registration_deadline: Option<String>,
}

// ========================================================================
// Contact
// ========================================================================

/// API request submitted by the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// API response for an accepted contact submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactResponse {
    /// Always `true`.
    pub success: bool,
    /// Confirmation shown to the visitor.
    pub message: String,
}
