// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use olympiad_cms_api::SessionStore;
use olympiad_cms_persistence::Persistence;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::config::ServerConfig;
use crate::{AppState, build_router};

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "admin123";
pub const BOUNDARY: &str = "olympiad-test-boundary";

/// A router over in-memory storage and a temporary public directory.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    /// Keeps the public and upload directories alive.
    _public_dir: TempDir,
}

impl TestApp {
    pub fn upload_dir(&self) -> PathBuf {
        self.state.config.upload_dir.clone()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Logs the seeded admin in and returns the `name=value` cookie pair.
    pub async fn login(&self) -> String {
        let response = self
            .send(json_request(
                "POST",
                "/api/login",
                &serde_json::json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }),
            ))
            .await;
        let set_cookie: &str = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login must set a cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_limit(10 * 1024 * 1024)
}

pub fn create_test_app_with_limit(max_upload_bytes: usize) -> TestApp {
    let public_dir: TempDir = tempfile::tempdir().unwrap();
    let root = public_dir.path();
    std::fs::create_dir_all(root.join("admin")).unwrap();
    std::fs::create_dir_all(root.join("uploads")).unwrap();
    std::fs::create_dir_all(root.join("css")).unwrap();
    std::fs::write(root.join("index.html"), "<h1>Olympiad home</h1>").unwrap();
    std::fs::write(root.join("blog.html"), "<h1>Blog</h1>").unwrap();
    std::fs::write(root.join("admin/login.html"), "<h1>Admin login</h1>").unwrap();
    std::fs::write(root.join("admin/dashboard.html"), "<h1>Dashboard</h1>").unwrap();
    std::fs::write(root.join("css/site.css"), "body { margin: 0; }").unwrap();

    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .ensure_default_admin(TEST_USERNAME, TEST_PASSWORD)
        .unwrap();

    let config: ServerConfig = ServerConfig {
        public_dir: root.to_path_buf(),
        upload_dir: root.join("uploads"),
        max_upload_bytes,
        secure_cookies: false,
    };

    let state: AppState = AppState::new(persistence, SessionStore::new(), config);
    let router: Router = build_router(state.clone());

    TestApp {
        router,
        state,
        _public_dir: public_dir,
    }
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    empty_request("GET", uri, cookie)
}

pub fn empty_request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    authed_json_request(method, uri, body, None)
}

pub fn authed_json_request(
    method: &str,
    uri: &str,
    body: &serde_json::Value,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// A request with a literal body and an optional `Content-Type`.
pub fn raw_request(
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(body.into()).unwrap()
}

/// Asserts a JSON error response and returns its message.
pub async fn error_message(response: Response<Body>, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let body = body_json(response).await;
    body["error"]
        .as_str()
        .expect("error body must carry a message")
        .to_string()
}

/// One part of a multipart body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        contents: &'a [u8],
    },
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>], cookie: Option<&str>) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                file_name,
                contents,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(contents);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder().method("POST").uri(uri).header(
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={BOUNDARY}"),
    );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Names of the files currently in the upload directory.
pub fn uploaded_files(app: &TestApp) -> Vec<String> {
    std::fs::read_dir(app.upload_dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}
