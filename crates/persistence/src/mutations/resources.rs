// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resource mutations.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::NewResource;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::resources;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a resource and returns its id.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn create_resource(conn: &mut _, resource: &NewResource) -> Result<i64, PersistenceError> {
    diesel::insert_into(resources::table)
        .values((
            resources::title.eq(&resource.title),
            resources::description.eq(resource.description.as_deref()),
            resources::resource_type.eq(&resource.resource_type),
            resources::file_url.eq(resource.file_url.as_deref()),
        ))
        .execute(conn)?;

    let resource_id: i64 = conn.get_last_insert_rowid()?;
    info!(resource_id, resource_type = %resource.resource_type, "Created resource");

    Ok(resource_id)
}
}

backend_fn! {
/// Deletes a resource, returning the number of rows removed.
///
/// The stored file, if any, is left on disk.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_resource(conn: &mut _, resource_id: i64) -> Result<usize, PersistenceError> {
    let deleted: usize =
        diesel::delete(resources::table.filter(resources::id.eq(resource_id))).execute(conn)?;

    info!(resource_id, deleted, "Deleted resource");
    Ok(deleted)
}
}
