// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Olympiad CMS.
//!
//! Stores blog posts, events, resources, olympiad dates, contact
//! submissions and the admin account. Built on Diesel with two backends.
//!
//! ## Database Backend Support
//!
//! - **`SQLite`** (default) — local development, single-file deployments and every standard test
//! - **`PostgreSQL`** — hosted deployments, selected by a `postgres://` database URL
//!
//! Postgres validation tests are marked `#[ignore]` and run with:
//! ```bash
//! cargo xtask test-postgres
//! ```
//!
//! ### Migration Strategy
//!
//! SQL syntax differs between backends, so there are two migration directories:
//!
//! - `migrations/` — `SQLite`
//! - `migrations_postgres/` — `PostgreSQL`
//!
//! Both produce the same schema. Migrations run on every startup; they are
//! the only place tables are created.
//!
//! ## Stored Formats
//!
//! - Calendar dates are `YYYY-MM-DD` text
//! - `created_at` is `YYYY-MM-DD HH:MM:SS` text in UTC, set by the database default
//! - `contact_submissions.read` is an integer restricted to 0 and 1

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::{
    BlogPost, ContactSubmission, Event, NewBlogPost, NewContactSubmission, NewEvent,
    NewOlympiadDate, NewResource, OlympiadDate, Resource,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Macro to generate monomorphic backend-specific query/mutation functions.
///
/// This macro generates two separate functions from a single function body:
/// - One suffixed with `_sqlite` taking `&mut SqliteConnection`
/// - One suffixed with `_postgres` taking `&mut PgConnection`
///
/// Diesel needs a concrete backend type at compile time, so a function
/// generic over the connection does not typecheck for most queries.
///
/// # Constraints
///
/// - The macro ONLY duplicates function bodies and substitutes connection types
/// - Backend dispatch happens exclusively in the `Persistence` adapter
///
/// # Usage
///
/// ```ignore
/// backend_fn! {
///     pub fn my_query(conn: &mut _, param: i64) -> Result<String, PersistenceError> {
///         diesel_schema::table::table
///             .filter(diesel_schema::table::id.eq(param))
///             .first::<String>(conn)
///             .map_err(Into::into)
///     }
/// }
/// ```
///
/// This generates:
/// - `my_query_sqlite(&mut SqliteConnection, i64) -> Result<String, PersistenceError>`
/// - `my_query_postgres(&mut PgConnection, i64) -> Result<String, PersistenceError>`
macro_rules! backend_fn {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident (
            $conn:ident : &mut _
            $(, $param:ident : $param_ty:ty)* $(,)?
        ) -> $ret:ty
        $body:block
    ) => {
        pastey::paste! {
            $(#[$meta])*
            $vis fn [<$name _sqlite>] (
                $conn: &mut SqliteConnection
                $(, $param : $param_ty)*
            ) -> $ret
            $body

            $(#[$meta])*
            $vis fn [<$name _postgres>] (
                $conn: &mut PgConnection
                $(, $param : $param_ty)*
            ) -> $ret
            $body
        }
    };
}

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::AdminData;
pub use error::PersistenceError;

/// Backend-specific database connection.
///
/// Chosen once at construction; callers of `Persistence` never see it.
pub enum BackendConnection {
    Sqlite(SqliteConnection),
    Postgres(PgConnection),
}

/// Persistence adapter for all CMS content.
///
/// Backend selection happens once at construction time and is transparent to callers.
pub struct Persistence {
    pub(crate) conn: BackendConnection,
}

/// Dispatches a generated query/mutation to the active backend.
macro_rules! dispatch {
    ($self:ident, $group:ident :: $module:ident :: $func:ident ( $($arg:expr),* $(,)? )) => {
        pastey::paste! {
            match &mut $self.conn {
                BackendConnection::Sqlite(conn) => {
                    $group::$module::[<$func _sqlite>](conn $(, $arg)*)
                }
                BackendConnection::Postgres(conn) => {
                    $group::$module::[<$func _postgres>](conn $(, $arg)*)
                }
            }
        }
    };
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own shared-cache database, so tests are isolated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self {
            conn: BackendConnection::Sqlite(conn),
        })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if missing and switched to WAL journaling.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self {
            conn: BackendConnection::Sqlite(conn),
        })
    }

    /// Creates a new persistence adapter with a `PostgreSQL` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached or migrated.
    pub fn new_with_postgres(database_url: &str) -> Result<Self, PersistenceError> {
        let conn: PgConnection = backend::postgres::initialize_database(database_url)?;

        Ok(Self {
            conn: BackendConnection::Postgres(conn),
        })
    }

    /// Opens the backend named by a database URL.
    ///
    /// `postgres://` and `postgresql://` URLs select `PostgreSQL`; anything
    /// else is treated as a `SQLite` file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn from_database_url(database_url: &str) -> Result<Self, PersistenceError> {
        if is_postgres_url(database_url) {
            Self::new_with_postgres(database_url)
        } else {
            Self::new_with_file(database_url)
        }
    }

    /// Returns a short name for the active backend, for logging.
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self.conn {
            BackendConnection::Sqlite(_) => "sqlite",
            BackendConnection::Postgres(_) => "postgres",
        }
    }

    // ========================================================================
    // Admins
    // ========================================================================

    /// Creates the admin account unless one with `username` already exists.
    ///
    /// # Returns
    ///
    /// `true` if a new account was inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or the insert fails.
    pub fn ensure_default_admin(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<bool, PersistenceError> {
        dispatch!(self, mutations::admins::ensure_default_admin(username, password))
    }

    /// Retrieves an admin by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_admin_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<AdminData>, PersistenceError> {
        dispatch!(self, queries::admins::get_admin_by_username(username))
    }

    /// Retrieves an admin by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_admin_by_id(&mut self, admin_id: i64) -> Result<Option<AdminData>, PersistenceError> {
        dispatch!(self, queries::admins::get_admin_by_id(admin_id))
    }

    /// Verifies a password against a stored bcrypt hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the hash is malformed.
    pub fn verify_password(
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PersistenceError> {
        queries::admins::verify_password(password, password_hash)
    }

    // ========================================================================
    // Blog Posts
    // ========================================================================

    /// Lists blog posts newest first, optionally restricted to one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_blog_posts(
        &mut self,
        category: Option<&str>,
    ) -> Result<Vec<BlogPost>, PersistenceError> {
        dispatch!(self, queries::blog_posts::list_blog_posts(category))
    }

    /// Retrieves a blog post by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_blog_post(&mut self, post_id: i64) -> Result<Option<BlogPost>, PersistenceError> {
        dispatch!(self, queries::blog_posts::get_blog_post(post_id))
    }

    /// Inserts a blog post and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_blog_post(&mut self, post: &NewBlogPost) -> Result<i64, PersistenceError> {
        dispatch!(self, mutations::blog_posts::create_blog_post(post))
    }

    /// Deletes a blog post, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_blog_post(&mut self, post_id: i64) -> Result<usize, PersistenceError> {
        dispatch!(self, mutations::blog_posts::delete_blog_post(post_id))
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Lists events by descending event date, optionally restricted to one type.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_events(&mut self, event_type: Option<&str>) -> Result<Vec<Event>, PersistenceError> {
        dispatch!(self, queries::events::list_events(event_type))
    }

    /// Retrieves an event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_event(&mut self, event_id: i64) -> Result<Option<Event>, PersistenceError> {
        dispatch!(self, queries::events::get_event(event_id))
    }

    /// Inserts an event and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_event(&mut self, event: &NewEvent) -> Result<i64, PersistenceError> {
        dispatch!(self, mutations::events::create_event(event))
    }

    /// Deletes an event, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_event(&mut self, event_id: i64) -> Result<usize, PersistenceError> {
        dispatch!(self, mutations::events::delete_event(event_id))
    }

    // ========================================================================
    // Resources
    // ========================================================================

    /// Lists resources newest first, optionally restricted to one type.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_resources(
        &mut self,
        resource_type: Option<&str>,
    ) -> Result<Vec<Resource>, PersistenceError> {
        dispatch!(self, queries::resources::list_resources(resource_type))
    }

    /// Retrieves a resource by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_resource(&mut self, resource_id: i64) -> Result<Option<Resource>, PersistenceError> {
        dispatch!(self, queries::resources::get_resource(resource_id))
    }

    /// Inserts a resource and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_resource(&mut self, resource: &NewResource) -> Result<i64, PersistenceError> {
        dispatch!(self, mutations::resources::create_resource(resource))
    }

    /// Deletes a resource, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_resource(&mut self, resource_id: i64) -> Result<usize, PersistenceError> {
        dispatch!(self, mutations::resources::delete_resource(resource_id))
    }

    // ========================================================================
    // Olympiad Dates
    // ========================================================================

    /// Lists dates on or after `today` (`YYYY-MM-DD`), soonest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_upcoming_olympiad_dates(
        &mut self,
        today: &str,
    ) -> Result<Vec<OlympiadDate>, PersistenceError> {
        dispatch!(self, queries::olympiad_dates::list_upcoming_olympiad_dates(today))
    }

    /// Lists every olympiad date, latest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_all_olympiad_dates(&mut self) -> Result<Vec<OlympiadDate>, PersistenceError> {
        dispatch!(self, queries::olympiad_dates::list_all_olympiad_dates())
    }

    /// Retrieves an olympiad date by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_olympiad_date(
        &mut self,
        date_id: i64,
    ) -> Result<Option<OlympiadDate>, PersistenceError> {
        dispatch!(self, queries::olympiad_dates::get_olympiad_date(date_id))
    }

    /// Inserts an olympiad date and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_olympiad_date(
        &mut self,
        date: &NewOlympiadDate,
    ) -> Result<i64, PersistenceError> {
        dispatch!(self, mutations::olympiad_dates::create_olympiad_date(date))
    }

    /// Deletes an olympiad date, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_olympiad_date(&mut self, date_id: i64) -> Result<usize, PersistenceError> {
        dispatch!(self, mutations::olympiad_dates::delete_olympiad_date(date_id))
    }

    // ========================================================================
    // Contact Submissions
    // ========================================================================

    /// Stores a contact submission as unread and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_contact_submission(
        &mut self,
        submission: &NewContactSubmission,
    ) -> Result<i64, PersistenceError> {
        dispatch!(
            self,
            mutations::contact_submissions::create_contact_submission(submission)
        )
    }

    /// Lists every contact submission, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_contact_submissions(&mut self) -> Result<Vec<ContactSubmission>, PersistenceError> {
        dispatch!(self, queries::contact_submissions::list_contact_submissions())
    }

    /// Retrieves a contact submission by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_contact_submission(
        &mut self,
        submission_id: i64,
    ) -> Result<Option<ContactSubmission>, PersistenceError> {
        dispatch!(
            self,
            queries::contact_submissions::get_contact_submission(submission_id)
        )
    }

    /// Marks a contact submission read, returning the number of rows matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn mark_contact_submission_read(
        &mut self,
        submission_id: i64,
    ) -> Result<usize, PersistenceError> {
        dispatch!(
            self,
            mutations::contact_submissions::mark_contact_submission_read(submission_id)
        )
    }

    /// Deletes a contact submission, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_contact_submission(
        &mut self,
        submission_id: i64,
    ) -> Result<usize, PersistenceError> {
        dispatch!(
            self,
            mutations::contact_submissions::delete_contact_submission(submission_id)
        )
    }
}

/// Returns whether `database_url` names a `PostgreSQL` server.
#[must_use]
pub fn is_postgres_url(database_url: &str) -> bool {
    database_url.starts_with("postgres://") || database_url.starts_with("postgresql://")
}
