// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contact submission queries.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::ContactSubmission;
use tracing::debug;

use crate::diesel_schema::contact_submissions;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = contact_submissions)]
struct ContactSubmissionRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
    read: i32,
    created_at: String,
}

impl From<ContactSubmissionRow> for ContactSubmission {
    fn from(row: ContactSubmissionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            subject: row.subject,
            message: row.message,
            read: row.read,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Lists every submission, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_contact_submissions(
    conn: &mut _,
) -> Result<Vec<ContactSubmission>, PersistenceError> {
    debug!("Listing contact submissions");

    let rows: Vec<ContactSubmissionRow> = contact_submissions::table
        .order((
            contact_submissions::created_at.desc(),
            contact_submissions::id.desc(),
        ))
        .select(ContactSubmissionRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ContactSubmission::from).collect())
}
}

backend_fn! {
/// Retrieves a single submission.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the submission does not exist.
pub fn get_contact_submission(
    conn: &mut _,
    submission_id: i64,
) -> Result<Option<ContactSubmission>, PersistenceError> {
    let row: Option<ContactSubmissionRow> = contact_submissions::table
        .filter(contact_submissions::id.eq(submission_id))
        .select(ContactSubmissionRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(ContactSubmission::from))
}
}
