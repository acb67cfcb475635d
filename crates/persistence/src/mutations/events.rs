// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event mutations.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::NewEvent;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::events;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts an event and returns its id.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn create_event(conn: &mut _, event: &NewEvent) -> Result<i64, PersistenceError> {
    diesel::insert_into(events::table)
        .values((
            events::title.eq(&event.title),
            events::description.eq(event.description.as_deref()),
            events::event_date.eq(&event.event_date),
            events::event_type.eq(&event.event_type),
            events::image_url.eq(event.image_url.as_deref()),
            events::certificate_url.eq(event.certificate_url.as_deref()),
        ))
        .execute(conn)?;

    let event_id: i64 = conn.get_last_insert_rowid()?;
    info!(event_id, event_type = %event.event_type, "Created event");

    Ok(event_id)
}
}

backend_fn! {
/// Deletes an event, returning the number of rows removed.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_event(conn: &mut _, event_id: i64) -> Result<usize, PersistenceError> {
    let deleted: usize =
        diesel::delete(events::table.filter(events::id.eq(event_id))).execute(conn)?;

    info!(event_id, deleted, "Deleted event");
    Ok(deleted)
}
}
