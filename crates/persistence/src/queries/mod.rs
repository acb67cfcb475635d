// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `admins` — Admin lookups and password verification
//! - `blog_posts`, `events`, `resources`, `olympiad_dates` — Public content listings and lookups
//! - `contact_submissions` — Contact-form inbox
//!
//! ## Backend-Specific Functions
//!
//! Every query is generated twice by `backend_fn!`:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_postgres` for `PostgreSQL`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod admins;
pub mod blog_posts;
pub mod contact_submissions;
pub mod events;
pub mod olympiad_dates;
pub mod resources;
