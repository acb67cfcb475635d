// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blog post mutations.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::NewBlogPost;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::blog_posts;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a blog post and returns its id.
///
/// The draft is expected to be validated already.
///
/// # Errors
///
/// Returns an error if the database insert fails.
pub fn create_blog_post(conn: &mut _, post: &NewBlogPost) -> Result<i64, PersistenceError> {
    diesel::insert_into(blog_posts::table)
        .values((
            blog_posts::title.eq(&post.title),
            blog_posts::content.eq(&post.content),
            blog_posts::category.eq(&post.category),
            blog_posts::author.eq(post.author.as_deref()),
            blog_posts::image_url.eq(post.image_url.as_deref()),
        ))
        .execute(conn)?;

    let post_id: i64 = conn.get_last_insert_rowid()?;
    info!(post_id, category = %post.category, "Created blog post");

    Ok(post_id)
}
}

backend_fn! {
/// Deletes a blog post.
///
/// # Returns
///
/// The number of rows removed (0 when the id was unknown).
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_blog_post(conn: &mut _, post_id: i64) -> Result<usize, PersistenceError> {
    let deleted: usize =
        diesel::delete(blog_posts::table.filter(blog_posts::id.eq(post_id))).execute(conn)?;

    info!(post_id, deleted, "Deleted blog post");
    Ok(deleted)
}
}
