// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blog post queries.

use diesel::prelude::*;
use diesel::{PgConnection, SqliteConnection};
use olympiad_cms_domain::BlogPost;
use tracing::debug;

use crate::diesel_schema::blog_posts;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = blog_posts)]
struct BlogPostRow {
    id: i64,
    title: String,
    content: String,
    category: String,
    author: Option<String>,
    image_url: Option<String>,
    created_at: String,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            category: row.category,
            author: row.author,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Lists blog posts, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `category` - Exact category to match, or `None` for every post
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_blog_posts(
    conn: &mut _,
    category: Option<&str>,
) -> Result<Vec<BlogPost>, PersistenceError> {
    debug!(?category, "Listing blog posts");

    let mut query = blog_posts::table
        .select(BlogPostRow::as_select())
        .into_boxed();

    if let Some(category) = category {
        query = query.filter(blog_posts::category.eq(category));
    }

    let rows: Vec<BlogPostRow> = query
        .order((blog_posts::created_at.desc(), blog_posts::id.desc()))
        .load(conn)?;

    Ok(rows.into_iter().map(BlogPost::from).collect())
}
}

backend_fn! {
/// Retrieves a single blog post.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the post does not exist.
pub fn get_blog_post(conn: &mut _, post_id: i64) -> Result<Option<BlogPost>, PersistenceError> {
    debug!("Looking up blog post {}", post_id);

    let row: Option<BlogPostRow> = blog_posts::table
        .filter(blog_posts::id.eq(post_id))
        .select(BlogPostRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(BlogPost::from))
}
}
