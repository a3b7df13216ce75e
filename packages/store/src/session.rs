//! # Persisted login session
//!
//! The session is the client's cached copy of the logged-in user and bearer
//! token. Its lifetime is fixed at login: [`Session::new`] stamps an absolute
//! expiry and nothing ever extends it. Loading an expired session yields
//! `None`, the same as having no session at all.
//!
//! Storage goes through the [`SessionStore`] trait so the same page logic
//! runs against `localStorage` on the web, a file on desktop, or memory in
//! tests.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::{AuthUser, Role};

/// Storage key / file stem the session is saved under.
pub const SESSION_KEY: &str = "currentuser";

/// Default session length, matching the cookie max-age used at login.
pub const DEFAULT_SESSION_HOURS: u32 = 8;

/// Logged-in user plus absolute expiry (unix seconds).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: AuthUser,
    pub expires_at: i64,
}

impl Session {
    /// Start a session that lasts `ttl_hours` from now.
    pub fn new(user: AuthUser, ttl_hours: u32) -> Self {
        let expires_at = (Utc::now() + Duration::hours(i64::from(ttl_hours))).timestamp();
        Self { user, expires_at }
    }

    pub fn token(&self) -> &str {
        &self.user.token
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    /// Reflect a role change the server reported for this user.
    pub fn with_role(mut self, role: Role) -> Self {
        self.user.user.role = role;
        self
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Async storage for the single current session.
pub trait SessionStore {
    /// Raw read of whatever is stored, expired or not.
    fn read(&self) -> impl std::future::Future<Output = Option<Session>>;
    fn save(&self, session: &Session) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;

    /// The live session, if any. Expired sessions are cleared on the way out.
    fn load(&self) -> impl std::future::Future<Output = Option<Session>> {
        async move {
            let session = self.read().await?;
            if session.is_expired() {
                self.clear().await;
                return None;
            }
            Some(session)
        }
    }

    /// Rewrite the cached role of the stored session, keeping its expiry.
    fn update_role(&self, role: Role) -> impl std::future::Future<Output = Option<Session>> {
        async move {
            let session = self.load().await?.with_role(role);
            self.save(&session).await;
            Some(session)
        }
    }
}
