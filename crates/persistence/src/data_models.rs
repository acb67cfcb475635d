// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Stored admin account.
///
/// `password_hash` is a bcrypt hash and never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminData {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}
