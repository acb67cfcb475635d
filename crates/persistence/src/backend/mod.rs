// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates backend-specific initialization, migration,
//! and helper functions that cannot be expressed in backend-agnostic
//! Diesel DSL.
//!
//! ## Backend Support
//!
//! - `sqlite` — `SQLite` backend (local development, single-file deployments, tests)
//! - `postgres` — `PostgreSQL` backend (hosted deployments, validated via opt-in tests)
//!
//! All content queries and mutations live in `queries/` and `mutations/`
//! and must work across both backends.

pub mod postgres;
pub mod sqlite;

use diesel::{Connection, PgConnection, SqliteConnection};

use crate::error::PersistenceError;

/// Trait for backend-specific operations.
///
/// Implemented for both `SqliteConnection` and `PgConnection` so that the
/// functions generated by `backend_fn!` can share a single body.
pub trait PersistenceBackend: Connection {
    /// Retrieves the id generated by the most recent insert on this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::get_last_insert_rowid(self)
    }
}

impl PersistenceBackend for PgConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        postgres::get_last_insert_rowid(self)
    }
}
