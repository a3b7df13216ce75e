use std::sync::{Arc, Mutex};

use crate::session::{Session, SessionStore};

/// In-memory SessionStore for testing and as a fallback when no platform
/// storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn read(&self) -> Option<Session> {
        self.session.lock().ok()?.clone()
    }

    async fn save(&self, session: &Session) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = Some(session.clone());
        }
    }

    async fn clear(&self) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthUser, Role, User};

    fn auth_user(role: Role) -> AuthUser {
        AuthUser {
            user: User {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role,
                is_blocked: false,
                avatar: None,
            },
            token: "tok".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_and_load_session() {
        let store = MemoryStore::new();

        // Initially empty
        assert!(store.load().await.is_none());

        let session = Session::new(auth_user(Role::User), 8);
        store.save(&session).await;

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.token(), "tok");
        assert_eq!(loaded.user.id(), "u1");
    }

    #[tokio::test]
    async fn test_expired_session_is_discarded() {
        let store = MemoryStore::new();

        let mut session = Session::new(auth_user(Role::User), 8);
        session.expires_at = 0;
        store.save(&session).await;

        assert!(store.load().await.is_none());
        // load() also cleared the stale entry
        assert!(store.read().await.is_none());
    }

    #[tokio::test]
    async fn test_clear_logs_out() {
        let store = MemoryStore::new();
        store.save(&Session::new(auth_user(Role::User), 8)).await;

        store.clear().await;

        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_update_role_keeps_expiry() {
        let store = MemoryStore::new();
        let session = Session::new(auth_user(Role::User), 8);
        let expires_at = session.expires_at;
        store.save(&session).await;

        let updated = store.update_role(Role::Admin).await.unwrap();
        assert!(updated.user.is_admin());
        assert_eq!(updated.expires_at, expires_at);

        let loaded = store.load().await.unwrap();
        assert!(loaded.user.is_admin());
    }

    #[tokio::test]
    async fn test_update_role_without_session() {
        let store = MemoryStore::new();
        assert!(store.update_role(Role::Admin).await.is_none());
    }

    #[test]
    fn test_session_json_roundtrip_keeps_token() {
        let session = Session::new(auth_user(Role::Admin), 1);
        let json = session.to_json().unwrap();
        assert!(json.contains("\"_id\":\"u1\""));
        let back = Session::from_json(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_session_lifetime_is_fixed_at_login() {
        let session = Session::new(auth_user(Role::User), 8);
        let now = chrono::Utc::now().timestamp();
        assert!(!session.is_expired_at(now));
        assert!(session.is_expired_at(now + 8 * 3600 + 1));
    }
}
