// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Olympiad CMS.
//!
//! Translates requests into validated domain drafts, runs them against
//! `Persistence` and shapes the results into response DTOs. Authentication
//! and the session store also live here. Nothing in this crate knows about
//! HTTP; the server crate maps `ApiError` variants to status codes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthenticatedAdmin, AuthenticationService, INVALID_CREDENTIALS, SessionData, SessionStore,
};
pub use error::{
    ApiError, AuthError, STORAGE_FAILURE_MESSAGE, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    CONTACT_FIELDS_REQUIRED, CONTACT_STORE_FAILED, CONTACT_THANK_YOU, create_blog_post,
    create_event, create_olympiad_date, create_resource, delete_blog_post,
    delete_contact_submission, delete_event, delete_olympiad_date, delete_resource,
    get_blog_post, get_event, get_olympiad_date, get_resource, list_all_olympiad_dates,
    list_blog_posts, list_contact_submissions, list_events, list_resources,
    list_upcoming_olympiad_dates, login, logout, mark_contact_submission_read, session_status,
    submit_contact,
};
pub use request_response::{
    ContactRequest, ContactResponse, CreateBlogPostRequest, CreateEventRequest,
    CreateOlympiadDateRequest, CreateResourceRequest, CreatedResponse, LoginRequest, LoginResult,
    SessionStatusResponse, SuccessResponse,
};
