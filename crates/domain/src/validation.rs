// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::DomainError;
use crate::types::{NewBlogPost, NewContactSubmission, NewEvent, NewOlympiadDate, NewResource};

/// Stored calendar date layout.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Rejects a required field that is empty or whitespace only.
///
/// # Errors
///
/// Returns `DomainError::MissingField` if the value is blank.
pub fn require_field(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the value is not a real calendar date.
pub fn parse_iso_date(field: &'static str, value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|_| {
        DomainError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}

/// Formats a date the way it is stored (`YYYY-MM-DD`).
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    // Only IO can fail here; Display uses the same layout.
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Validates a blog post draft.
///
/// # Errors
///
/// Returns an error if the title, content or category is blank.
pub fn validate_new_blog_post(post: &NewBlogPost) -> Result<(), DomainError> {
    require_field("title", &post.title)?;
    require_field("content", &post.content)?;
    require_field("category", &post.category)?;
    Ok(())
}

/// Validates an event draft.
///
/// # Errors
///
/// Returns an error if the title, date or type is blank, or if the date
/// is not a valid calendar date.
pub fn validate_new_event(event: &NewEvent) -> Result<(), DomainError> {
    require_field("title", &event.title)?;
    require_field("event_date", &event.event_date)?;
    require_field("event_type", &event.event_type)?;
    parse_iso_date("event_date", &event.event_date)?;
    Ok(())
}

/// Validates a resource draft.
///
/// # Errors
///
/// Returns an error if the title or resource type is blank.
pub fn validate_new_resource(resource: &NewResource) -> Result<(), DomainError> {
    require_field("title", &resource.title)?;
    require_field("resource_type", &resource.resource_type)?;
    Ok(())
}

/// Validates an olympiad date draft.
///
/// # Errors
///
/// Returns an error if the title or date is blank, or if either date
/// field is not a valid calendar date.
pub fn validate_new_olympiad_date(date: &NewOlympiadDate) -> Result<(), DomainError> {
    require_field("title", &date.title)?;
    require_field("date", &date.date)?;
    parse_iso_date("date", &date.date)?;
    if let Some(deadline) = &date.registration_deadline {
        parse_iso_date("registration_deadline", deadline)?;
    }
    Ok(())
}

/// Validates a contact form submission.
///
/// All five fields are mandatory.
///
/// # Errors
///
/// Returns `DomainError::MissingField` naming the first blank field.
pub fn validate_new_contact_submission(
    submission: &NewContactSubmission,
) -> Result<(), DomainError> {
    require_field("name", &submission.name)?;
    require_field("email", &submission.email)?;
    require_field("phone", &submission.phone)?;
    require_field("subject", &submission.subject)?;
    require_field("message", &submission.message)?;
    Ok(())
}
