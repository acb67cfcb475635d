// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! All state-changing operations: inserts, deletes, the contact
//! submission read flag and default admin seeding. New row ids are read
//! back through `PersistenceBackend::get_last_insert_rowid`.

pub mod admins;
pub mod blog_posts;
pub mod contact_submissions;
pub mod events;
pub mod olympiad_dates;
pub mod resources;
