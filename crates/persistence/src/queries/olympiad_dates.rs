// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Olympiad calendar queries.
//!
//! Dates are stored as `YYYY-MM-DD` text, so string comparison and ordering
//! match calendar order on every backend.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::OlympiadDate;
use tracing::debug;

use crate::diesel_schema::olympiad_dates;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = olympiad_dates)]
struct OlympiadDateRow {
    id: i64,
    title: String,
    date: String,
    registration_deadline: Option<String>,
    description: Option<String>,
    created_at: String,
}

impl From<OlympiadDateRow> for OlympiadDate {
    fn from(row: OlympiadDateRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            date: row.date,
            registration_deadline: row.registration_deadline,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Lists dates falling on or after `today`, soonest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `today` - The current date as `YYYY-MM-DD`
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_upcoming_olympiad_dates(
    conn: &mut _,
    today: &str,
) -> Result<Vec<OlympiadDate>, PersistenceError> {
    debug!("Listing olympiad dates from {}", today);

    let rows: Vec<OlympiadDateRow> = olympiad_dates::table
        .filter(olympiad_dates::date.ge(today))
        .order((olympiad_dates::date.asc(), olympiad_dates::id.asc()))
        .select(OlympiadDateRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(OlympiadDate::from).collect())
}
}

backend_fn! {
/// Lists every date, latest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_all_olympiad_dates(conn: &mut _) -> Result<Vec<OlympiadDate>, PersistenceError> {
    debug!("Listing all olympiad dates");

    let rows: Vec<OlympiadDateRow> = olympiad_dates::table
        .order((olympiad_dates::date.desc(), olympiad_dates::id.desc()))
        .select(OlympiadDateRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(OlympiadDate::from).collect())
}
}

backend_fn! {
/// Retrieves a single olympiad date.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the row does not exist.
pub fn get_olympiad_date(
    conn: &mut _,
    date_id: i64,
) -> Result<Option<OlympiadDate>, PersistenceError> {
    let row: Option<OlympiadDateRow> = olympiad_dates::table
        .filter(olympiad_dates::id.eq(date_id))
        .select(OlympiadDateRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(OlympiadDate::from))
}
}
