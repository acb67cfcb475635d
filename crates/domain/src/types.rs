// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Content entities and their creation drafts.
//!
//! Every entity is a flat row with a server-assigned `id` and `created_at`.
//! The `New*` drafts carry exactly the caller-supplied columns; they are
//! checked by the functions in `validation` before they reach storage.

use serde::{Deserialize, Serialize};

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: Option<String>,
    /// Public path of the attached image, e.g. `/uploads/1700000000000-42.png`.
    pub image_url: Option<String>,
    pub created_at: String,
}

/// Caller-supplied columns for a new blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: Option<String>,
    pub image_url: Option<String>,
}

/// A past or upcoming olympiad event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub event_date: String,
    pub event_type: String,
    pub image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub created_at: String,
}

/// Caller-supplied columns for a new event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_date: String,
    pub event_type: String,
    pub image_url: Option<String>,
    pub certificate_url: Option<String>,
}

/// A downloadable asset record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub resource_type: String,
    pub file_url: Option<String>,
    pub created_at: String,
}

/// Caller-supplied columns for a new resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewResource {
    pub title: String,
    pub description: Option<String>,
    pub resource_type: String,
    pub file_url: Option<String>,
}

/// A key date in the olympiad calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OlympiadDate {
    pub id: i64,
    pub title: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub registration_deadline: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// Caller-supplied columns for a new olympiad date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOlympiadDate {
    pub title: String,
    pub date: String,
    pub registration_deadline: Option<String>,
    pub description: Option<String>,
}

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    /// `0` while unread, `1` once an admin has marked it read.
    pub read: i32,
    pub created_at: String,
}

impl ContactSubmission {
    /// Returns whether an admin has marked this submission read.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.read != 0
    }
}

/// Caller-supplied columns for a new contact submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Normalizes a listing filter.
///
/// Absent, blank and the literal `all` (any case) all mean "no filter".
#[must_use]
pub fn normalize_filter(filter: Option<&str>) -> Option<&str> {
    filter
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

/// Collapses a blank optional field to `None`.
///
/// HTML forms submit empty strings for untouched inputs.
#[must_use]
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
