// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod error;
mod extract;
mod pages;
mod routes;
mod session;
mod uploads;

#[cfg(test)]
mod tests;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use clap::Parser;
use olympiad_cms_api::SessionStore;
use olympiad_cms_persistence::Persistence;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{DatabaseTarget, ServerConfig, StartupError};
use crate::uploads::UploadStore;

/// Olympiad CMS Server - content backend for the Olympiad website
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Database connection URL. `postgres://` URLs select Postgres.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Fallback database URL, as provided by Netlify.
    #[arg(long, env = "NETLIFY_DATABASE_URL", hide = true)]
    netlify_database_url: Option<String>,

    /// `SQLite` database file, used when no database URL is configured
    #[arg(short, long, env = "OLYMPIAD_DB_PATH", default_value = "olympiads.db")]
    database: PathBuf,

    /// Address to bind the server to
    #[arg(short, long, env = "OLYMPIAD_BIND", default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Directory holding the static site
    #[arg(long, env = "OLYMPIAD_PUBLIC_DIR", default_value = "public")]
    public_dir: PathBuf,

    /// Directory uploaded files are stored in
    #[arg(long, env = "OLYMPIAD_UPLOAD_DIR", default_value = "public/uploads")]
    upload_dir: PathBuf,

    /// Username of the seeded admin account
    #[arg(long, env = "OLYMPIAD_ADMIN_USERNAME", default_value = "admin")]
    admin_username: String,

    /// Password given to the admin account when it is first created
    #[arg(long, env = "OLYMPIAD_ADMIN_PASSWORD", default_value = "admin123")]
    admin_password: String,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "OLYMPIAD_MAX_UPLOAD_BYTES", default_value_t = 10 * 1024 * 1024)]
    max_upload_bytes: usize,

    /// Mark the session cookie `Secure` (serve over HTTPS)
    #[arg(long, env = "OLYMPIAD_SECURE_COOKIES")]
    secure_cookies: bool,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The single database connection.
    persistence: Arc<Mutex<Persistence>>,
    /// Live admin sessions.
    sessions: Arc<SessionStore>,
    /// Where uploaded files go.
    uploads: Arc<UploadStore>,
    config: Arc<ServerConfig>,
}

impl AppState {
    fn new(persistence: Persistence, sessions: SessionStore, config: ServerConfig) -> Self {
        let uploads: UploadStore = UploadStore::new(config.upload_dir.clone());
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            sessions: Arc::new(sessions),
            uploads: Arc::new(uploads),
            config: Arc::new(config),
        }
    }
}

/// Builds the complete application router.
fn build_router(app_state: AppState) -> Router {
    let config: Arc<ServerConfig> = Arc::clone(&app_state.config);

    routes::api_router()
        .merge(pages::page_router(&config))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Olympiad CMS Server");

    run(args).await?;

    Ok(())
}

async fn run(args: Args) -> Result<(), StartupError> {
    let target: DatabaseTarget = DatabaseTarget::resolve(
        &[args.database_url, args.netlify_database_url],
        args.database,
    );
    let mut persistence: Persistence = target.open()?;
    info!(backend = persistence.backend_name(), "Database ready");

    if persistence.ensure_default_admin(&args.admin_username, &args.admin_password)? {
        info!(username = %args.admin_username, "Created default admin account");
    }

    let config: ServerConfig = ServerConfig {
        public_dir: args.public_dir,
        upload_dir: args.upload_dir,
        max_upload_bytes: args.max_upload_bytes,
        secure_cookies: args.secure_cookies,
    };

    let app_state: AppState = AppState::new(persistence, SessionStore::new(), config);
    app_state
        .uploads
        .ensure_dir()
        .await
        .map_err(|source| StartupError::UploadDir {
            path: app_state.uploads.dir().to_path_buf(),
            source,
        })?;

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(StartupError::Serve)?;

    Ok(())
}
