//! # Browser `localStorage` session store
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the web platform. The
//! session is kept as JSON under the `currentuser` key of
//! `window.localStorage`.
//!
//! All trait methods swallow storage errors: an unavailable or corrupted entry
//! reads as "logged out" rather than breaking the page.

use crate::session::{Session, SessionStore, SESSION_KEY};

#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStorageStore {
    async fn read(&self) -> Option<Session> {
        let raw = Self::storage()?.get_item(SESSION_KEY).ok()??;
        Session::from_json(&raw).ok()
    }

    async fn save(&self, session: &Session) {
        let (Some(storage), Ok(json)) = (Self::storage(), session.to_json()) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &json);
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
