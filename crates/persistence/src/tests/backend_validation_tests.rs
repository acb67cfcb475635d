// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for `PostgreSQL`.
//!
//! These tests check schema compatibility, not content rules, which the
//! `SQLite` suite already covers:
//! - Migrations apply cleanly and are re-runnable
//! - `lastval()` returns the id of the row just inserted
//! - UNIQUE and CHECK constraints are enforced
//! - Server-side `created_at` defaults use the shared text format
//!
//! ## Test Execution
//!
//! Every test is marked `#[ignore]` and runs only via `cargo xtask test-postgres`,
//! which provides:
//! - `DATABASE_URL` pointing at a disposable Postgres container
//! - `OLYMPIAD_TEST_BACKEND=postgres`
//!
//! Tests fail fast if that infrastructure is missing.

use diesel::PgConnection;
use diesel::prelude::*;
use std::env;

use crate::Persistence;
use crate::backend::postgres;
use crate::tests::{create_test_blog_post, create_test_contact_submission, create_test_event};

/// Helper to get the Postgres connection URL from environment.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, indicating missing infrastructure.
fn get_postgres_url() -> String {
    env::var("DATABASE_URL").expect(
        "DATABASE_URL not set - Postgres tests must be run via `cargo xtask test-postgres`",
    )
}

/// Helper to verify we're running in the Postgres test environment.
///
/// # Panics
///
/// Panics if `OLYMPIAD_TEST_BACKEND` is not set to `postgres`.
fn verify_postgres_test_environment() {
    let backend = env::var("OLYMPIAD_TEST_BACKEND").expect(
        "OLYMPIAD_TEST_BACKEND not set - Postgres tests must be run via `cargo xtask test-postgres`",
    );
    assert_eq!(backend, "postgres", "OLYMPIAD_TEST_BACKEND must be 'postgres'");
}

#[test]
#[ignore = "requires Postgres via cargo xtask test-postgres"]
fn test_postgres_connection() {
    verify_postgres_test_environment();
    let url = get_postgres_url();

    let result = PgConnection::establish(&url);
    assert!(
        result.is_ok(),
        "Failed to connect to Postgres: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires Postgres via cargo xtask test-postgres"]
fn test_postgres_migrations_apply_cleanly() {
    verify_postgres_test_environment();
    let url = get_postgres_url();

    let first = postgres::initialize_database(&url);
    assert!(first.is_ok(), "Failed to migrate Postgres: {:?}", first.err());

    let second = postgres::initialize_database(&url);
    assert!(
        second.is_ok(),
        "Re-running migrations should be a no-op: {:?}",
        second.err()
    );
}

#[test]
#[ignore = "requires Postgres via cargo xtask test-postgres"]
fn test_postgres_insert_returns_row_id() {
    verify_postgres_test_environment();
    let url = get_postgres_url();

    let mut persistence = Persistence::new_with_postgres(&url).expect("Failed to open Postgres");
    assert_eq!(persistence.backend_name(), "postgres");

    let post_id = persistence
        .create_blog_post(&create_test_blog_post("Postgres post", "backend-check"))
        .expect("Failed to insert blog post");
    let post = persistence
        .get_blog_post(post_id)
        .expect("Failed to query blog post")
        .expect("Inserted post must be readable by its id");
    assert_eq!(post.title, "Postgres post");

    let event_id = persistence
        .create_event(&create_test_event("Postgres event", "2026-04-01", "backend-check"))
        .expect("Failed to insert event");
    let event = persistence
        .get_event(event_id)
        .expect("Failed to query event")
        .expect("Inserted event must be readable by its id");
    assert_eq!(event.event_date, "2026-04-01");

    let format = time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    assert!(time::PrimitiveDateTime::parse(&post.created_at, format).is_ok());
}

#[test]
#[ignore = "requires Postgres via cargo xtask test-postgres"]
fn test_postgres_contact_read_flag() {
    verify_postgres_test_environment();
    let url = get_postgres_url();

    let mut persistence = Persistence::new_with_postgres(&url).expect("Failed to open Postgres");
    let id = persistence
        .create_contact_submission(&create_test_contact_submission("Postgres"))
        .expect("Failed to insert submission");

    assert_eq!(persistence.mark_contact_submission_read(id).unwrap(), 1);
    let stored = persistence.get_contact_submission(id).unwrap().unwrap();
    assert_eq!(stored.read, 1);

    let mut conn = postgres::initialize_database(&url).expect("Failed to reconnect");
    let invalid = diesel::sql_query(format!(
        "UPDATE contact_submissions SET read = 2 WHERE id = {id}"
    ))
    .execute(&mut conn);
    assert!(invalid.is_err(), "read must be restricted to 0 or 1");
}

#[test]
#[ignore = "requires Postgres via cargo xtask test-postgres"]
fn test_postgres_admin_username_unique() {
    verify_postgres_test_environment();
    let url = get_postgres_url();

    let mut persistence = Persistence::new_with_postgres(&url).expect("Failed to open Postgres");
    persistence
        .ensure_default_admin("pg_admin", "secret")
        .expect("Failed to seed admin");
    assert!(
        !persistence
            .ensure_default_admin("pg_admin", "secret")
            .expect("Second seed must succeed")
    );

    let mut conn = postgres::initialize_database(&url).expect("Failed to reconnect");
    let duplicate = diesel::sql_query(
        "INSERT INTO admins (username, password) VALUES ('pg_admin', 'hash')",
    )
    .execute(&mut conn);
    assert!(
        duplicate.is_err(),
        "Duplicate username should fail due to UNIQUE constraint"
    );
}
