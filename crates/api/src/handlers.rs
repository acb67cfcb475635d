// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Each handler performs one operation against `Persistence`. Handlers that
//! mutate content take an `&AuthenticatedAdmin`, which can only be obtained
//! from a validated session.

use olympiad_cms_domain::{
    BlogPost, ContactSubmission, DomainError, Event, NewBlogPost, NewContactSubmission, NewEvent,
    NewOlympiadDate, NewResource, OlympiadDate, Resource, format_iso_date, non_blank,
    normalize_filter, parse_iso_date, validate_new_blog_post, validate_new_contact_submission,
    validate_new_event, validate_new_olympiad_date, validate_new_resource,
};
use olympiad_cms_persistence::Persistence;
use time::Date;
use tracing::{error, info};

use crate::auth::{AuthenticatedAdmin, AuthenticationService, SessionStore};
use crate::error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    ContactRequest, ContactResponse, CreateBlogPostRequest, CreateEventRequest,
    CreateOlympiadDateRequest, CreateResourceRequest, CreatedResponse, LoginRequest, LoginResult,
    SessionStatusResponse, SuccessResponse,
};

/// Message for a contact form with any blank field.
pub const CONTACT_FIELDS_REQUIRED: &str = "All fields are required";

/// Confirmation returned for an accepted contact submission.
pub const CONTACT_THANK_YOU: &str = "Thank you for your message! We will get back to you soon.";

/// Message for a contact submission that could not be stored.
pub const CONTACT_STORE_FAILED: &str = "Failed to submit message";

fn not_found(resource_type: &str, id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: format!("{resource_type} with id {id} does not exist"),
    }
}

/// Rewrites a validated date into the stored `YYYY-MM-DD` form.
fn canonical_date(field: &'static str, value: &str) -> Result<String, DomainError> {
    parse_iso_date(field, value).map(format_iso_date)
}

// ========================================================================
// Authentication
// ========================================================================

/// Logs an admin in.
///
/// # Returns
///
/// * `Ok(LoginResult)` with the new session token
/// * `Err(ApiError)` if authentication fails
///
/// # Errors
///
/// Returns `AuthenticationFailed` ("Invalid credentials") for any rejected
/// username/password pair and `Internal` if storage fails.
pub fn login(
    persistence: &mut Persistence,
    sessions: &SessionStore,
    request: &LoginRequest,
) -> Result<LoginResult, ApiError> {
    let (session_token, admin): (String, AuthenticatedAdmin) = AuthenticationService::login(
        persistence,
        sessions,
        &request.username,
        &request.password,
    )?;

    Ok(LoginResult {
        session_token,
        username: admin.username,
    })
}

/// Logs out by discarding the session, if any.
///
/// Always succeeds.
#[must_use]
pub fn logout(sessions: &SessionStore, session_token: Option<&str>) -> SuccessResponse {
    if let Some(token) = session_token {
        AuthenticationService::logout(sessions, token);
    }
    SuccessResponse::ok()
}

/// Reports whether `session_token` belongs to a live admin session.
///
/// # Errors
///
/// Returns an error only if storage fails.
pub fn session_status(
    persistence: &mut Persistence,
    sessions: &SessionStore,
    session_token: Option<&str>,
) -> Result<SessionStatusResponse, ApiError> {
    let Some(token) = session_token else {
        return Ok(SessionStatusResponse {
            authenticated: false,
            username: None,
        });
    };

    match AuthenticationService::validate_session(persistence, sessions, token) {
        Ok(admin) => Ok(SessionStatusResponse {
            authenticated: true,
            username: Some(admin.username),
        }),
        Err(AuthError::SessionRequired | AuthError::AuthenticationFailed { .. }) => {
            Ok(SessionStatusResponse {
                authenticated: false,
                username: None,
            })
        }
        Err(e @ AuthError::StorageFailure { .. }) => Err(ApiError::from(e)),
    }
}

// ========================================================================
// Blog Posts
// ========================================================================

/// Lists blog posts, newest first.
///
/// `category` of `None`, blank or `all` lists every post.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn list_blog_posts(
    persistence: &mut Persistence,
    category: Option<&str>,
) -> Result<Vec<BlogPost>, ApiError> {
    persistence
        .list_blog_posts(normalize_filter(category))
        .map_err(|e| translate_persistence_error(&e))
}

/// Fetches one blog post.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id.
pub fn get_blog_post(persistence: &mut Persistence, post_id: i64) -> Result<BlogPost, ApiError> {
    persistence
        .get_blog_post(post_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| not_found("Blog post", post_id))
}

/// Creates a blog post.
///
/// # Errors
///
/// Returns `InvalidInput` if title, content or category is blank and
/// `Internal` if storage fails.
pub fn create_blog_post(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    request: CreateBlogPostRequest,
) -> Result<CreatedResponse, ApiError> {
    let post: NewBlogPost = NewBlogPost {
        title: request.title.unwrap_or_default(),
        content: request.content.unwrap_or_default(),
        category: request.category.unwrap_or_default(),
        author: non_blank(request.author),
        image_url: non_blank(request.image_url),
    };
    validate_new_blog_post(&post).map_err(translate_domain_error)?;

    let id: i64 = persistence
        .create_blog_post(&post)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, post_id = id, "Blog post published");

    Ok(CreatedResponse::new(id))
}

/// Deletes a blog post. Unknown ids still succeed.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn delete_blog_post(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    post_id: i64,
) -> Result<SuccessResponse, ApiError> {
    persistence
        .delete_blog_post(post_id)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, post_id, "Blog post deleted");
    Ok(SuccessResponse::ok())
}

// ========================================================================
// Events
// ========================================================================

/// Lists events by descending event date.
///
/// `event_type` of `None`, blank or `all` lists every event.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn list_events(
    persistence: &mut Persistence,
    event_type: Option<&str>,
) -> Result<Vec<Event>, ApiError> {
    persistence
        .list_events(normalize_filter(event_type))
        .map_err(|e| translate_persistence_error(&e))
}

/// Fetches one event.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id.
pub fn get_event(persistence: &mut Persistence, event_id: i64) -> Result<Event, ApiError> {
    persistence
        .get_event(event_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| not_found("Event", event_id))
}

/// Creates an event.
///
/// # Errors
///
/// Returns `InvalidInput` if title, event date or type is blank or the date
/// is not `YYYY-MM-DD`, and `Internal` if storage fails.
pub fn create_event(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    request: CreateEventRequest,
) -> Result<CreatedResponse, ApiError> {
    let mut event: NewEvent = NewEvent {
        title: request.title.unwrap_or_default(),
        description: non_blank(request.description),
        event_date: request.event_date.unwrap_or_default(),
        event_type: request.event_type.unwrap_or_default(),
        image_url: non_blank(request.image_url),
        certificate_url: non_blank(request.certificate_url),
    };
    validate_new_event(&event).map_err(translate_domain_error)?;
    event.event_date =
        canonical_date("event_date", &event.event_date).map_err(translate_domain_error)?;

    let id: i64 = persistence
        .create_event(&event)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, event_id = id, "Event created");

    Ok(CreatedResponse::new(id))
}

/// Deletes an event. Unknown ids still succeed.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn delete_event(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    event_id: i64,
) -> Result<SuccessResponse, ApiError> {
    persistence
        .delete_event(event_id)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, event_id, "Event deleted");
    Ok(SuccessResponse::ok())
}

// ========================================================================
// Resources
// ========================================================================

/// Lists resources, newest first.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn list_resources(
    persistence: &mut Persistence,
    resource_type: Option<&str>,
) -> Result<Vec<Resource>, ApiError> {
    persistence
        .list_resources(normalize_filter(resource_type))
        .map_err(|e| translate_persistence_error(&e))
}

/// Fetches one resource.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id.
pub fn get_resource(
    persistence: &mut Persistence,
    resource_id: i64,
) -> Result<Resource, ApiError> {
    persistence
        .get_resource(resource_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| not_found("Resource", resource_id))
}

/// Creates a resource.
///
/// # Errors
///
/// Returns `InvalidInput` if the title or resource type is blank and
/// `Internal` if storage fails.
pub fn create_resource(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    request: CreateResourceRequest,
) -> Result<CreatedResponse, ApiError> {
    let resource: NewResource = NewResource {
        title: request.title.unwrap_or_default(),
        description: non_blank(request.description),
        resource_type: request.resource_type.unwrap_or_default(),
        file_url: non_blank(request.file_url),
    };
    validate_new_resource(&resource).map_err(translate_domain_error)?;

    let id: i64 = persistence
        .create_resource(&resource)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, resource_id = id, "Resource created");

    Ok(CreatedResponse::new(id))
}

/// Deletes a resource. Unknown ids still succeed.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn delete_resource(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    resource_id: i64,
) -> Result<SuccessResponse, ApiError> {
    persistence
        .delete_resource(resource_id)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, resource_id, "Resource deleted");
    Ok(SuccessResponse::ok())
}

// ========================================================================
// Olympiad Dates
// ========================================================================

/// Lists dates on or after `today`, soonest first.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn list_upcoming_olympiad_dates(
    persistence: &mut Persistence,
    today: Date,
) -> Result<Vec<OlympiadDate>, ApiError> {
    persistence
        .list_upcoming_olympiad_dates(&format_iso_date(today))
        .map_err(|e| translate_persistence_error(&e))
}

/// Lists every date, latest first.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn list_all_olympiad_dates(
    persistence: &mut Persistence,
    _admin: &AuthenticatedAdmin,
) -> Result<Vec<OlympiadDate>, ApiError> {
    persistence
        .list_all_olympiad_dates()
        .map_err(|e| translate_persistence_error(&e))
}

/// Fetches one olympiad date.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id.
pub fn get_olympiad_date(
    persistence: &mut Persistence,
    date_id: i64,
) -> Result<OlympiadDate, ApiError> {
    persistence
        .get_olympiad_date(date_id)
        .map_err(|e| translate_persistence_error(&e))?
        .ok_or_else(|| not_found("Olympiad date", date_id))
}

/// Creates an olympiad date.
///
/// # Errors
///
/// Returns `InvalidInput` if the title or date is blank or a date is not
/// `YYYY-MM-DD`, and `Internal` if storage fails.
pub fn create_olympiad_date(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    request: CreateOlympiadDateRequest,
) -> Result<CreatedResponse, ApiError> {
    let mut date: NewOlympiadDate = NewOlympiadDate {
        title: request.title.unwrap_or_default(),
        date: request.date.unwrap_or_default(),
        registration_deadline: non_blank(request.registration_deadline),
        description: non_blank(request.description),
    };
    validate_new_olympiad_date(&date).map_err(translate_domain_error)?;

    date.date = canonical_date("date", &date.date).map_err(translate_domain_error)?;
    date.registration_deadline = date
        .registration_deadline
        .as_deref()
        .map(|deadline| canonical_date("registration_deadline", deadline))
        .transpose()
        .map_err(translate_domain_error)?;

    let id: i64 = persistence
        .create_olympiad_date(&date)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, date_id = id, "Olympiad date created");

    Ok(CreatedResponse::new(id))
}

/// Deletes an olympiad date. Unknown ids still succeed.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn delete_olympiad_date(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    date_id: i64,
) -> Result<SuccessResponse, ApiError> {
    persistence
        .delete_olympiad_date(date_id)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, date_id, "Olympiad date deleted");
    Ok(SuccessResponse::ok())
}

// ========================================================================
// Contact Submissions
// ========================================================================

/// Accepts a public contact-form submission.
///
/// # Errors
///
/// Returns `InvalidInput` ("All fields are required") if any of the five
/// fields is blank, in which case nothing is stored, and `Internal` if
/// storage fails.
pub fn submit_contact(
    persistence: &mut Persistence,
    request: ContactRequest,
) -> Result<ContactResponse, ApiError> {
    let submission: NewContactSubmission = NewContactSubmission {
        name: request.name.unwrap_or_default(),
        email: request.email.unwrap_or_default(),
        phone: request.phone.unwrap_or_default(),
        subject: request.subject.unwrap_or_default(),
        message: request.message.unwrap_or_default(),
    };

    if let Err(DomainError::MissingField { field } | DomainError::InvalidDate { field, .. }) =
        validate_new_contact_submission(&submission)
    {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from(CONTACT_FIELDS_REQUIRED),
        });
    }

    persistence
        .create_contact_submission(&submission)
        .map_err(|e| {
            error!("Failed to store contact submission: {}", e);
            ApiError::Internal {
                message: String::from(CONTACT_STORE_FAILED),
            }
        })?;

    Ok(ContactResponse {
        success: true,
        message: String::from(CONTACT_THANK_YOU),
    })
}

/// Lists every contact submission, newest first.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn list_contact_submissions(
    persistence: &mut Persistence,
    _admin: &AuthenticatedAdmin,
) -> Result<Vec<ContactSubmission>, ApiError> {
    persistence
        .list_contact_submissions()
        .map_err(|e| translate_persistence_error(&e))
}

/// Marks a contact submission read. Idempotent; unknown ids still succeed.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn mark_contact_submission_read(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    submission_id: i64,
) -> Result<SuccessResponse, ApiError> {
    persistence
        .mark_contact_submission_read(submission_id)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, submission_id, "Contact submission marked read");
    Ok(SuccessResponse::ok())
}

/// Deletes a contact submission. Unknown ids still succeed.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn delete_contact_submission(
    persistence: &mut Persistence,
    admin: &AuthenticatedAdmin,
    submission_id: i64,
) -> Result<SuccessResponse, ApiError> {
    persistence
        .delete_contact_submission(submission_id)
        .map_err(|e| translate_persistence_error(&e))?;
    info!(admin = %admin.username, submission_id, "Contact submission deleted");
    Ok(SuccessResponse::ok())
}
