// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use olympiad_cms_persistence::Persistence;

use crate::{AuthenticatedAdmin, ContactRequest, SessionStore};

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "admin123";

/// In-memory persistence with the default admin seeded.
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .ensure_default_admin(TEST_USERNAME, TEST_PASSWORD)
        .unwrap();
    persistence
}

/// Logs the seeded admin in and returns the session token.
pub fn login_test_admin(persistence: &mut Persistence, sessions: &SessionStore) -> String {
    crate::AuthenticationService::login(persistence, sessions, TEST_USERNAME, TEST_PASSWORD)
        .expect("seeded admin must be able to log in")
        .0
}

pub fn create_test_admin() -> AuthenticatedAdmin {
    AuthenticatedAdmin::new(1, String::from(TEST_USERNAME))
}

pub fn create_valid_contact_request() -> ContactRequest {
    ContactRequest {
        name: Some(String::from("Ada Lovelace")),
        email: Some(String::from("ada@example.com")),
        phone: Some(String::from("555-0100")),
        subject: Some(String::from("Team registration")),
        message: Some(String::from("Can two schools register a joint team?")),
    }
}
