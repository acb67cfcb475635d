// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin seeding.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::admins;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts the admin account if no admin with `username` exists yet.
///
/// The password is stored as a bcrypt hash. An existing account is left
/// untouched, including its password.
///
/// # Returns
///
/// `true` if the account was created, `false` if it already existed.
///
/// # Errors
///
/// Returns an error if hashing or the database insert fails.
pub fn ensure_default_admin(
    conn: &mut _,
    username: &str,
    password: &str,
) -> Result<bool, PersistenceError> {
    let existing: i64 = admins::table
        .filter(admins::username.eq(username))
        .count()
        .get_result(conn)?;

    if existing > 0 {
        debug!("Admin '{}' already present", username);
        return Ok(false);
    }

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    diesel::insert_into(admins::table)
        .values((
            admins::username.eq(username),
            admins::password.eq(&password_hash),
        ))
        .execute(conn)?;

    let admin_id: i64 = conn.get_last_insert_rowid()?;
    info!(admin_id, "Created default admin '{}'", username);

    Ok(true)
}
}
