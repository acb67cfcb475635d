// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{
    BlogPost, ContactSubmission, Event, NewBlogPost, NewContactSubmission, NewEvent,
    NewOlympiadDate, NewResource, OlympiadDate, Resource, non_blank, normalize_filter,
};
pub use validation::{
    format_iso_date, parse_iso_date, require_field, validate_new_blog_post,
    validate_new_contact_submission, validate_new_event, validate_new_olympiad_date,
    validate_new_resource,
};
