// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Olympiad calendar mutations.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::NewOlympiadDate;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::olympiad_dates;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts an olympiad date and returns its id.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn create_olympiad_date(
    conn: &mut _,
    date: &NewOlympiadDate,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(olympiad_dates::table)
        .values((
            olympiad_dates::title.eq(&date.title),
            olympiad_dates::date.eq(&date.date),
            olympiad_dates::registration_deadline.eq(date.registration_deadline.as_deref()),
            olympiad_dates::description.eq(date.description.as_deref()),
        ))
        .execute(conn)?;

    let date_id: i64 = conn.get_last_insert_rowid()?;
    info!(date_id, date = %date.date, "Created olympiad date");

    Ok(date_id)
}
}

backend_fn! {
/// Deletes an olympiad date, returning the number of rows removed.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_olympiad_date(conn: &mut _, date_id: i64) -> Result<usize, PersistenceError> {
    let deleted: usize =
        diesel::delete(olympiad_dates::table.filter(olympiad_dates::id.eq(date_id)))
            .execute(conn)?;

    info!(date_id, deleted, "Deleted olympiad date");
    Ok(deleted)
}
}
