// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static site routes.
//!
//! Named pages map to fixed HTML files in the public directory; everything
//! else that is not an API route falls through to the public directory.

use axum::{
    Router,
    extract::{Request, State as AxumState},
    response::{IntoResponse, Response},
    routing::get,
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::debug;

use crate::AppState;
use crate::config::ServerConfig;
use crate::session::SessionAdmin;
use crate::uploads::UPLOADS_ROUTE;

/// Public pages and the file each one serves.
const PAGES: [(&str, &str); 7] = [
    ("/", "index.html"),
    ("/blog", "blog.html"),
    ("/about", "about.html"),
    ("/events", "events.html"),
    ("/resources", "resources.html"),
    ("/contact", "contact.html"),
    ("/admin", "admin/login.html"),
];

/// The admin dashboard, served only to a logged-in admin.
const DASHBOARD_PAGE: &str = "admin/dashboard.html";

/// Handler for GET `/admin/dashboard`.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    request: Request,
) -> Response {
    debug!(username = %admin.username, "Serving admin dashboard");

    ServeFile::new(app_state.config.public_dir.join(DASHBOARD_PAGE))
        .oneshot(request)
        .await
        .map_or_else(|never| match never {}, IntoResponse::into_response)
}

/// Builds the page, upload and static file routes.
pub fn page_router(config: &ServerConfig) -> Router<AppState> {
    let router: Router<AppState> = PAGES
        .into_iter()
        .fold(Router::new(), |router, (route, file)| {
            router.route_service(route, ServeFile::new(config.public_dir.join(file)))
        });

    router
        .route("/admin/dashboard", get(handle_dashboard))
        .nest_service(UPLOADS_ROUTE, ServeDir::new(&config.upload_dir))
        .fallback_service(ServeDir::new(&config.public_dir))
}
