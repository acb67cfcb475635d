// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod backend_validation_tests;
mod blog_post_tests;
mod contact_submission_tests;
mod resource_tests;

use olympiad_cms_domain::{NewBlogPost, NewContactSubmission, NewEvent, NewOlympiadDate, NewResource};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_blog_post(title: &str, category: &str) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        content: format!("Body of {title}"),
        category: category.to_string(),
        author: Some(String::from("Olympiad Committee")),
        image_url: None,
    }
}

pub fn create_test_event(title: &str, event_date: &str, event_type: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: None,
        event_date: event_date.to_string(),
        event_type: event_type.to_string(),
        image_url: None,
        certificate_url: None,
    }
}

pub fn create_test_resource(title: &str, resource_type: &str) -> NewResource {
    NewResource {
        title: title.to_string(),
        description: Some(String::from("Practice material")),
        resource_type: resource_type.to_string(),
        file_url: None,
    }
}

pub fn create_test_olympiad_date(title: &str, date: &str) -> NewOlympiadDate {
    NewOlympiadDate {
        title: title.to_string(),
        date: date.to_string(),
        registration_deadline: None,
        description: None,
    }
}

pub fn create_test_contact_submission(name: &str) -> NewContactSubmission {
    NewContactSubmission {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: String::from("555-0100"),
        subject: String::from("Registration"),
        message: String::from("How do I register my school?"),
    }
}
