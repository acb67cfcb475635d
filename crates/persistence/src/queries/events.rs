// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event queries.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::Event;
use tracing::debug;

use crate::diesel_schema::events;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = events)]
struct EventRow {
    id: i64,
    title: String,
    description: Option<String>,
    event_date: String,
    event_type: String,
    image_url: Option<String>,
    certificate_url: Option<String>,
    created_at: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            event_date: row.event_date,
            event_type: row.event_type,
            image_url: row.image_url,
            certificate_url: row.certificate_url,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Lists events, latest event date first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_type` - Exact event type to match, or `None` for every event
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_events(
    conn: &mut _,
    event_type: Option<&str>,
) -> Result<Vec<Event>, PersistenceError> {
    debug!(?event_type, "Listing events");

    let mut query = events::table.select(EventRow::as_select()).into_boxed();

    if let Some(event_type) = event_type {
        query = query.filter(events::event_type.eq(event_type));
    }

    let rows: Vec<EventRow> = query
        .order((events::event_date.desc(), events::id.desc()))
        .load(conn)?;

    Ok(rows.into_iter().map(Event::from).collect())
}
}

backend_fn! {
/// Retrieves a single event.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the event does not exist.
pub fn get_event(conn: &mut _, event_id: i64) -> Result<Option<Event>, PersistenceError> {
    debug!("Looking up event {}", event_id);

    let row: Option<EventRow> = events::table
        .filter(events::id.eq(event_id))
        .select(EventRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Event::from))
}
}
