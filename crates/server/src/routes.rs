// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON API routes under `/api`.

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::{HeaderMap, header},
    response::IntoResponse,
    routing::{any, get, post, put},
};
use olympiad_cms_api::{
    ContactRequest, ContactResponse, CreateBlogPostRequest, CreateEventRequest,
    CreateOlympiadDateRequest, CreateResourceRequest, CreatedResponse, LoginRequest, LoginResult,
    SessionStatusResponse, SuccessResponse, create_blog_post, create_event, create_olympiad_date,
    create_resource, delete_blog_post, delete_contact_submission, delete_event,
    delete_olympiad_date, delete_resource, get_blog_post, get_event, get_olympiad_date,
    get_resource, list_all_olympiad_dates, list_blog_posts, list_contact_submissions, list_events,
    list_resources, list_upcoming_olympiad_dates, login, logout, mark_contact_submission_read,
    session_status, submit_contact,
};
use olympiad_cms_domain::{BlogPost, ContactSubmission, Event, OlympiadDate, Resource};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::AppState;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiMultipart, ApiPath, ApiQuery};
use crate::session::{SessionAdmin, expired_session_cookie, session_cookie, session_token};
use crate::uploads::UploadForm;

/// Message for any unmatched `/api` path.
pub const API_ROUTE_NOT_FOUND: &str = "API route not found";

/// Query parameters for listing blog posts.
#[derive(Debug, Default, Deserialize)]
struct CategoryQuery {
    category: Option<String>,
}

/// Query parameters for listings filtered by `?type=`.
#[derive(Debug, Default, Deserialize)]
struct TypeQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
}

// ========================================================================
// Authentication
// ========================================================================

/// Handler for POST `/api/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    info!(username = %req.username, "Handling login request");

    let result: LoginResult = login(
        &mut *app_state.persistence.lock().await,
        &app_state.sessions,
        &req,
    )?;

    let cookie: String = session_cookie(
        &result.session_token,
        app_state.sessions.lifetime().whole_seconds(),
        app_state.config.secure_cookies,
    );

    Ok(([(header::SET_COOKIE, cookie)], Json(SuccessResponse::ok())))
}

/// Handler for POST `/api/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let token: Option<String> = session_token(&headers);
    let response: SuccessResponse = logout(&app_state.sessions, token.as_deref());
    let cookie: String = expired_session_cookie(app_state.config.secure_cookies);

    ([(header::SET_COOKIE, cookie)], Json(response))
}

/// Handler for GET `/api/session`.
async fn handle_session_status(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionStatusResponse>, HttpError> {
    let token: Option<String> = session_token(&headers);
    let status: SessionStatusResponse = session_status(
        &mut *app_state.persistence.lock().await,
        &app_state.sessions,
        token.as_deref(),
    )?;
    Ok(Json(status))
}

// ========================================================================
// Blog Posts
// ========================================================================

async fn handle_list_blog_posts(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
) -> Result<Json<Vec<BlogPost>>, HttpError> {
    let posts: Vec<BlogPost> = list_blog_posts(
        &mut *app_state.persistence.lock().await,
        query.category.as_deref(),
    )?;
    Ok(Json(posts))
}

async fn handle_get_blog_post(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<Json<BlogPost>, HttpError> {
    let post: BlogPost = get_blog_post(&mut *app_state.persistence.lock().await, post_id)?;
    Ok(Json(post))
}

/// Handler for POST `/api/blog-posts` (multipart, optional `image`).
async fn handle_create_blog_post(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiMultipart(multipart): ApiMultipart,
) -> Result<Json<CreatedResponse>, HttpError> {
    let mut form: UploadForm = UploadForm::read(multipart, &app_state.uploads, &["image"]).await?;

    let request: CreateBlogPostRequest = CreateBlogPostRequest {
        title: form.take_field("title"),
        content: form.take_field("content"),
        category: form.take_field("category"),
        author: form.take_field("author"),
        image_url: form.take_file("image"),
    };

    let created: CreatedResponse =
        create_blog_post(&mut *app_state.persistence.lock().await, &admin, request)?;
    Ok(Json(created))
}

async fn handle_delete_blog_post(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, HttpError> {
    let response: SuccessResponse =
        delete_blog_post(&mut *app_state.persistence.lock().await, &admin, post_id)?;
    Ok(Json(response))
}

// ========================================================================
// Events
// ========================================================================

async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<TypeQuery>,
) -> Result<Json<Vec<Event>>, HttpError> {
    let events: Vec<Event> = list_events(
        &mut *app_state.persistence.lock().await,
        query.kind.as_deref(),
    )?;
    Ok(Json(events))
}

async fn handle_get_event(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(event_id): ApiPath<i64>,
) -> Result<Json<Event>, HttpError> {
    let event: Event = get_event(&mut *app_state.persistence.lock().await, event_id)?;
    Ok(Json(event))
}

/// Handler for POST `/api/events` (multipart, optional `image` and `certificate`).
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiMultipart(multipart): ApiMultipart,
) -> Result<Json<CreatedResponse>, HttpError> {
    let mut form: UploadForm =
        UploadForm::read(multipart, &app_state.uploads, &["image", "certificate"]).await?;

    let request: CreateEventRequest = CreateEventRequest {
        title: form.take_field("title"),
        description: form.take_field("description"),
        event_date: form.take_field("event_date"),
        event_type: form.take_field("event_type"),
        image_url: form.take_file("image"),
        certificate_url: form.take_file("certificate"),
    };

    let created: CreatedResponse =
        create_event(&mut *app_state.persistence.lock().await, &admin, request)?;
    Ok(Json(created))
}

async fn handle_delete_event(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiPath(event_id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, HttpError> {
    let response: SuccessResponse =
        delete_event(&mut *app_state.persistence.lock().await, &admin, event_id)?;
    Ok(Json(response))
}

// ========================================================================
// Resources
// ========================================================================

async fn handle_list_resources(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<TypeQuery>,
) -> Result<Json<Vec<Resource>>, HttpError> {
    let resources: Vec<Resource> = list_resources(
        &mut *app_state.persistence.lock().await,
        query.kind.as_deref(),
    )?;
    Ok(Json(resources))
}

async fn handle_get_resource(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(resource_id): ApiPath<i64>,
) -> Result<Json<Resource>, HttpError> {
    let resource: Resource =
        get_resource(&mut *app_state.persistence.lock().await, resource_id)?;
    Ok(Json(resource))
}

/// Handler for POST `/api/resources` (multipart, optional `file`).
async fn handle_create_resource(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiMultipart(multipart): ApiMultipart,
) -> Result<Json<CreatedResponse>, HttpError> {
    let mut form: UploadForm = UploadForm::read(multipart, &app_state.uploads, &["file"]).await?;

    let request: CreateResourceRequest = CreateResourceRequest {
        title: form.take_field("title"),
        description: form.take_field("description"),
        resource_type: form.take_field("resource_type"),
        file_url: form.take_file("file"),
    };

    let created: CreatedResponse =
        create_resource(&mut *app_state.persistence.lock().await, &admin, request)?;
    Ok(Json(created))
}

async fn handle_delete_resource(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiPath(resource_id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, HttpError> {
    let response: SuccessResponse =
        delete_resource(&mut *app_state.persistence.lock().await, &admin, resource_id)?;
    Ok(Json(response))
}

// ========================================================================
// Olympiad Dates
// ========================================================================

/// Handler for GET `/api/olympiad-dates`.
///
/// Only dates on or after today (UTC) are listed.
async fn handle_list_upcoming_olympiad_dates(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<OlympiadDate>>, HttpError> {
    let today = OffsetDateTime::now_utc().date();
    let dates: Vec<OlympiadDate> =
        list_upcoming_olympiad_dates(&mut *app_state.persistence.lock().await, today)?;
    Ok(Json(dates))
}

async fn handle_list_all_olympiad_dates(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
) -> Result<Json<Vec<OlympiadDate>>, HttpError> {
    let dates: Vec<OlympiadDate> =
        list_all_olympiad_dates(&mut *app_state.persistence.lock().await, &admin)?;
    Ok(Json(dates))
}

async fn handle_get_olympiad_date(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(date_id): ApiPath<i64>,
) -> Result<Json<OlympiadDate>, HttpError> {
    let date: OlympiadDate =
        get_olympiad_date(&mut *app_state.persistence.lock().await, date_id)?;
    Ok(Json(date))
}

async fn handle_create_olympiad_date(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiJson(req): ApiJson<CreateOlympiadDateRequest>,
) -> Result<Json<CreatedResponse>, HttpError> {
    let created: CreatedResponse =
        create_olympiad_date(&mut *app_state.persistence.lock().await, &admin, req)?;
    Ok(Json(created))
}

async fn handle_delete_olympiad_date(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiPath(date_id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, HttpError> {
    let response: SuccessResponse =
        delete_olympiad_date(&mut *app_state.persistence.lock().await, &admin, date_id)?;
    Ok(Json(response))
}

// ========================================================================
// Contact
// ========================================================================

/// Handler for POST `/api/contact`.
async fn handle_submit_contact(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> Result<Json<ContactResponse>, HttpError> {
    debug!("Handling contact submission");
    let response: ContactResponse =
        submit_contact(&mut *app_state.persistence.lock().await, req)?;
    Ok(Json(response))
}

async fn handle_list_contact_submissions(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
) -> Result<Json<Vec<ContactSubmission>>, HttpError> {
    let submissions: Vec<ContactSubmission> =
        list_contact_submissions(&mut *app_state.persistence.lock().await, &admin)?;
    Ok(Json(submissions))
}

async fn handle_mark_contact_submission_read(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiPath(submission_id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, HttpError> {
    let response: SuccessResponse = mark_contact_submission_read(
        &mut *app_state.persistence.lock().await,
        &admin,
        submission_id,
    )?;
    Ok(Json(response))
}

async fn handle_delete_contact_submission(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    ApiPath(submission_id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, HttpError> {
    let response: SuccessResponse = delete_contact_submission(
        &mut *app_state.persistence.lock().await,
        &admin,
        submission_id,
    )?;
    Ok(Json(response))
}

/// Handler for any unmatched `/api` path.
async fn handle_api_not_found() -> HttpError {
    HttpError::not_found(API_ROUTE_NOT_FOUND)
}

/// Builds the `/api` routes.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(handle_login))
        .route("/api/logout", post(handle_logout))
        .route("/api/session", get(handle_session_status))
        .route(
            "/api/blog-posts",
            get(handle_list_blog_posts).post(handle_create_blog_post),
        )
        .route(
            "/api/blog-posts/{id}",
            get(handle_get_blog_post).delete(handle_delete_blog_post),
        )
        .route(
            "/api/events",
            get(handle_list_events).post(handle_create_event),
        )
        .route(
            "/api/events/{id}",
            get(handle_get_event).delete(handle_delete_event),
        )
        .route(
            "/api/resources",
            get(handle_list_resources).post(handle_create_resource),
        )
        .route(
            "/api/resources/{id}",
            get(handle_get_resource).delete(handle_delete_resource),
        )
        .route(
            "/api/olympiad-dates",
            get(handle_list_upcoming_olympiad_dates).post(handle_create_olympiad_date),
        )
        .route(
            "/api/olympiad-dates/{id}",
            get(handle_get_olympiad_date).delete(handle_delete_olympiad_date),
        )
        .route(
            "/api/all-olympiad-dates",
            get(handle_list_all_olympiad_dates),
        )
        .route("/api/contact", post(handle_submit_contact))
        .route(
            "/api/contact-submissions",
            get(handle_list_contact_submissions),
        )
        .route(
            "/api/contact-submissions/{id}/read",
            put(handle_mark_contact_submission_read),
        )
        .route(
            "/api/contact-submissions/{id}",
            axum::routing::delete(handle_delete_contact_submission),
        )
        .route("/api/{*rest}", any(handle_api_not_found))
        .method_not_allowed_fallback(handle_api_not_found)
}
