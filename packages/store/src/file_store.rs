//! # Filesystem-backed session store
//!
//! [`FileStore`] keeps the session in a single JSON file so a desktop login
//! survives restarts for the remainder of its lifetime.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── currentuser.json
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/chattrix/` |
//! | Linux | `~/.local/share/chattrix/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\chattrix\` |

use std::path::PathBuf;

use crate::session::{Session, SessionStore, SESSION_KEY};

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(format!("{SESSION_KEY}.json"))
    }
}

impl SessionStore for FileStore {
    async fn read(&self) -> Option<Session> {
        let content = std::fs::read_to_string(self.session_path()).ok()?;
        Session::from_json(&content).ok()
    }

    async fn save(&self, session: &Session) {
        let Ok(json) = session.to_json() else {
            return;
        };
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.session_path(), json);
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.session_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthUser, Role, User};

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("chattrix_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        let session = Session::new(
            AuthUser {
                user: User {
                    id: "u1".to_string(),
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    role: Role::User,
                    is_blocked: false,
                    avatar: None,
                },
                token: "tok".to_string(),
            },
            8,
        );
        store.save(&session).await;

        // Re-open from same directory
        let store2 = FileStore::new(dir.clone());
        let loaded = store2.load().await.unwrap();
        assert_eq!(loaded, session);

        store2.clear().await;
        assert!(store.load().await.is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_logged_out() {
        let dir = std::env::temp_dir().join(format!("chattrix_corrupt_{}", std::process::id()));
        let _ = std::fs::create_dir_all(&dir);
        std::fs::write(dir.join("currentuser.json"), "not json").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(store.load().await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
