// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin queries.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::AdminData;
use crate::diesel_schema::admins;
use crate::error::PersistenceError;

/// Diesel Queryable struct for admin rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = admins)]
struct AdminRow {
    id: i64,
    username: String,
    password: String,
    created_at: String,
}

impl From<AdminRow> for AdminData {
    fn from(row: AdminRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password_hash: row.password,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Retrieves an admin by username.
///
/// Usernames are matched exactly.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no admin has that username.
pub fn get_admin_by_username(
    conn: &mut _,
    username: &str,
) -> Result<Option<AdminData>, PersistenceError> {
    debug!("Looking up admin by username: {}", username);

    let result: Result<AdminRow, diesel::result::Error> = admins::table
        .filter(admins::username.eq(username))
        .select(AdminRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(AdminData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves an admin by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the admin does not exist.
pub fn get_admin_by_id(conn: &mut _, admin_id: i64) -> Result<Option<AdminData>, PersistenceError> {
    debug!("Looking up admin by ID: {}", admin_id);

    let result: Result<AdminRow, diesel::result::Error> = admins::table
        .filter(admins::id.eq(admin_id))
        .select(AdminRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(AdminData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

/// Verifies a plain-text password against a stored bcrypt hash.
///
/// This is backend-independent and exists here so that bcrypt stays a
/// persistence concern alongside hashing in `mutations::admins`.
///
/// # Errors
///
/// Returns an error if the stored hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    Ok(bcrypt::verify(password, password_hash)?)
}
