// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Runtime configuration resolved from the command line and environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use olympiad_cms_persistence::{Persistence, PersistenceError, is_postgres_url};
use tracing::info;

/// Settings the router needs after startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory holding the static site.
    pub public_dir: PathBuf,
    /// Directory uploaded files are written to and served from.
    pub upload_dir: PathBuf,
    /// Request body limit, applied to uploads and JSON alike.
    pub max_upload_bytes: usize,
    /// Whether the session cookie carries the `Secure` attribute.
    pub secure_cookies: bool,
}

/// Where the content database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// A connection URL. `postgres://` URLs select Postgres.
    Url(String),
    /// A `SQLite` database file.
    File(PathBuf),
}

impl DatabaseTarget {
    /// Picks the database from the configured sources.
    ///
    /// The first non-blank URL wins; without one the `SQLite` file is used.
    #[must_use]
    pub fn resolve(urls: &[Option<String>], file: PathBuf) -> Self {
        urls.iter()
            .flatten()
            .map(|url| url.trim())
            .find(|url| !url.is_empty())
            .map_or(Self::File(file), |url| Self::Url(url.to_string()))
    }

    /// Opens the database, running migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migrations fail.
    pub fn open(&self) -> Result<Persistence, PersistenceError> {
        match self {
            Self::Url(url) => {
                if is_postgres_url(url) {
                    info!("Using Postgres database from configured URL");
                } else {
                    info!("Using SQLite database from configured URL");
                }
                Persistence::from_database_url(url)
            }
            Self::File(path) => {
                info!("Using SQLite database file at: {}", path.display());
                Persistence::new_with_file(path)
            }
        }
    }
}

/// Failures that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to open database: {0}")]
    Database(#[from] PersistenceError),
    #[error("failed to prepare upload directory {path}: {source}")]
    UploadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(std::io::Error),
}
