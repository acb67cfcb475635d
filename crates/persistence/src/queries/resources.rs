// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resource queries.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::Resource;
use tracing::debug;

use crate::diesel_schema::resources;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = resources)]
struct ResourceRow {
    id: i64,
    title: String,
    description: Option<String>,
    resource_type: String,
    file_url: Option<String>,
    created_at: String,
}

impl From<ResourceRow> for Resource {
    fn from(row: ResourceRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            resource_type: row.resource_type,
            file_url: row.file_url,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Lists resources, newest first, optionally restricted to one `resource_type`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_resources(
    conn: &mut _,
    resource_type: Option<&str>,
) -> Result<Vec<Resource>, PersistenceError> {
    debug!(?resource_type, "Listing resources");

    let mut query = resources::table
        .select(ResourceRow::as_select())
        .into_boxed();

    if let Some(resource_type) = resource_type {
        query = query.filter(resources::resource_type.eq(resource_type));
    }

    let rows: Vec<ResourceRow> = query
        .order((resources::created_at.desc(), resources::id.desc()))
        .load(conn)?;

    Ok(rows.into_iter().map(Resource::from).collect())
}
}

backend_fn! {
/// Retrieves a single resource.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the resource does not exist.
pub fn get_resource(conn: &mut _, resource_id: i64) -> Result<Option<Resource>, PersistenceError> {
    debug!("Looking up resource {}", resource_id);

    let row: Option<ResourceRow> = resources::table
        .filter(resources::id.eq(resource_id))
        .select(ResourceRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Resource::from))
}
}
