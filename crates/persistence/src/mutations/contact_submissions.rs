// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contact submission mutations.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::NewContactSubmission;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::contact_submissions;
use crate::error::PersistenceError;

backend_fn! {
/// Stores a new, unread contact submission and returns its id.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn create_contact_submission(
    conn: &mut _,
    submission: &NewContactSubmission,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(contact_submissions::table)
        .values((
            contact_submissions::name.eq(&submission.name),
            contact_submissions::email.eq(&submission.email),
            contact_submissions::phone.eq(&submission.phone),
            contact_submissions::subject.eq(&submission.subject),
            contact_submissions::message.eq(&submission.message),
            contact_submissions::read.eq(0),
        ))
        .execute(conn)?;

    let submission_id: i64 = conn.get_last_insert_rowid()?;
    info!(submission_id, "Stored contact submission");

    Ok(submission_id)
}
}

backend_fn! {
/// Marks a submission as read.
///
/// Marking an already-read submission again is a no-op that still reports
/// the row as affected.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn mark_contact_submission_read(
    conn: &mut _,
    submission_id: i64,
) -> Result<usize, PersistenceError> {
    let updated: usize = diesel::update(
        contact_submissions::table.filter(contact_submissions::id.eq(submission_id)),
    )
    .set(contact_submissions::read.eq(1))
    .execute(conn)?;

    info!(submission_id, updated, "Marked contact submission read");
    Ok(updated)
}
}

backend_fn! {
/// Deletes a submission, returning the number of rows removed.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_contact_submission(
    conn: &mut _,
    submission_id: i64,
) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(
        contact_submissions::table.filter(contact_submissions::id.eq(submission_id)),
    )
    .execute(conn)?;

    info!(submission_id, deleted, "Deleted contact submission");
    Ok(deleted)
}
}
