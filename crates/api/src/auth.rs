// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication types and services.
//!
//! There is a single privileged role: the admin. A successful login creates
//! a server-side session keyed by an opaque random token; the token travels
//! in a cookie and is resolved back to the admin on every protected request.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use olympiad_cms_persistence::{AdminData, Persistence};
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// The single client-facing reason for any rejected login.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// An admin whose session has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    /// The admin's row id.
    pub admin_id: i64,
    /// The admin's username.
    pub username: String,
}

impl AuthenticatedAdmin {
    /// Creates a new authenticated admin.
    #[must_use]
    pub const fn new(admin_id: i64, username: String) -> Self {
        Self { admin_id, username }
    }
}

impl From<AdminData> for AuthenticatedAdmin {
    fn from(admin: AdminData) -> Self {
        Self::new(admin.id, admin.username)
    }
}

/// Server-side session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionData {
    /// The admin this session belongs to.
    pub admin_id: i64,
    /// When the session stops being valid.
    pub expires_at: OffsetDateTime,
}

impl SessionData {
    /// Returns whether the session has expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }
}

/// In-memory session store.
///
/// Sessions do not survive a restart. The store is shared through the
/// application state; it is never a global.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SessionData>>,
    lifetime: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Default session lifetime (24 hours).
    pub const DEFAULT_LIFETIME: Duration = Duration::hours(24);

    /// Creates an empty store using the default lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lifetime(Self::DEFAULT_LIFETIME)
    }

    /// Creates an empty store whose sessions last `lifetime`.
    #[must_use]
    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            lifetime,
        }
    }

    /// The lifetime given to new sessions.
    #[must_use]
    pub const fn lifetime(&self) -> Duration {
        self.lifetime
    }

    // A panic while holding the lock cannot leave the map half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionData>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a session for `admin_id` and returns its token.
    #[must_use]
    pub fn create(&self, admin_id: i64) -> String {
        let token: String = generate_session_token();
        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + self.lifetime;

        self.lock().insert(
            token.clone(),
            SessionData {
                admin_id,
                expires_at,
            },
        );

        token
    }

    /// Looks up a live session.
    ///
    /// An expired session is removed and reported as absent.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<SessionData> {
        let mut sessions = self.lock();
        let session: SessionData = *sessions.get(token)?;

        if session.is_expired_at(OffsetDateTime::now_utc()) {
            sessions.remove(token);
            debug!("Dropped expired session");
            return None;
        }

        Some(session)
    }

    /// Removes a session; returns whether one existed.
    #[must_use]
    pub fn remove(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    /// Removes every expired session and returns how many were dropped.
    #[must_use]
    pub fn purge_expired(&self) -> usize {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let mut sessions = self.lock();
        let before: usize = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        before - sessions.len()
    }

    /// Number of stored sessions, including any not yet purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether the store holds no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Generates an unguessable 256-bit session token as lowercase hex.
fn generate_session_token() -> String {
    (0..4)
        .map(|_| format!("{:016x}", rand::random::<u64>()))
        .collect()
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Verifies admin credentials and opens a session.
    ///
    /// Unknown usernames, wrong passwords and unreadable stored hashes all
    /// produce the same `Invalid credentials` failure, and no session is
    /// created. A successful login first drops every expired session.
    ///
    /// # Returns
    ///
    /// The new session token and the authenticated admin.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` for rejected credentials and
    /// `StorageFailure` if the admin table cannot be read.
    pub fn login(
        persistence: &mut Persistence,
        sessions: &SessionStore,
        username: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedAdmin), AuthError> {
        let Some(admin) = persistence.get_admin_by_username(username)? else {
            warn!("Login rejected: unknown username");
            return Err(Self::invalid_credentials());
        };

        let verified: bool = Persistence::verify_password(password, &admin.password_hash)
            .unwrap_or_else(|e| {
                warn!(admin_id = admin.id, "Stored password hash unreadable: {}", e);
                false
            });

        if !verified {
            warn!(admin_id = admin.id, "Login rejected: wrong password");
            return Err(Self::invalid_credentials());
        }

        let purged: usize = sessions.purge_expired();
        if purged > 0 {
            debug!(purged, "Purged expired sessions");
        }

        let token: String = sessions.create(admin.id);
        info!(admin_id = admin.id, "Admin logged in");

        Ok((token, AuthenticatedAdmin::from(admin)))
    }

    /// Ends a session.
    ///
    /// Unknown tokens are ignored; logging out always succeeds.
    pub fn logout(sessions: &SessionStore, session_token: &str) {
        if sessions.remove(session_token) {
            info!("Admin logged out");
        }
    }

    /// Resolves a session token to the admin it belongs to.
    ///
    /// The session must exist, be unexpired and point at an admin row that
    /// still exists.
    ///
    /// # Errors
    ///
    /// Returns `SessionRequired` if any of those checks fail and
    /// `StorageFailure` if the admin lookup fails.
    pub fn validate_session(
        persistence: &mut Persistence,
        sessions: &SessionStore,
        session_token: &str,
    ) -> Result<AuthenticatedAdmin, AuthError> {
        let session: SessionData = sessions
            .get(session_token)
            .ok_or(AuthError::SessionRequired)?;

        let Some(admin) = persistence.get_admin_by_id(session.admin_id)? else {
            warn!(
                admin_id = session.admin_id,
                "Session refers to a missing admin"
            );
            let _ = sessions.remove(session_token);
            return Err(AuthError::SessionRequired);
        };

        Ok(AuthenticatedAdmin::from(admin))
    }

    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from(INVALID_CREDENTIALS),
        }
    }
}
