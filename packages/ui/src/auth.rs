//! Authentication context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::{AuthUser, ClientConfig, Role, Session, SessionStore};

use crate::platform::{load_config, session_store};
use crate::Page;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(Session::token)
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(AuthUser::is_admin)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// API client carrying the current session's token, if any. Reading it
/// inside a resource re-runs the resource when the user logs in or out.
pub fn use_api() -> Memo<ApiClient> {
    let auth = use_auth();
    let config = use_config();
    use_memo(move || ApiClient::from_config(&config).with_token(auth().token().map(str::to_string)))
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    use_context_provider(load_config);

    // Restore the persisted session on mount; expired sessions are dropped.
    let _ = use_resource(move || async move {
        let session = session_store().load().await;
        if let Some(s) = &session {
            tracing::info!("Restored session for {}", s.user.user.display_name());
        }
        auth_state.set(AuthState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Send anonymous visitors of login-only pages to the login page once the
/// stored session has been checked.
pub fn use_login_guard(page: Page, on_navigate: EventHandler<Page>) {
    let auth = use_auth();
    use_effect(move || {
        let state = auth();
        if page.requires_login() && !state.loading && state.session.is_none() {
            tracing::debug!("{} needs a login", page.path());
            on_navigate.call(Page::Login);
        }
    });
}

/// Persist a fresh login and publish it.
pub async fn sign_in(auth: &mut Signal<AuthState>, user: AuthUser, ttl_hours: u32) {
    let session = Session::new(user, ttl_hours);
    session_store().save(&session).await;
    auth.set(AuthState {
        session: Some(session),
        loading: false,
    });
}

pub async fn sign_out(auth: &mut Signal<AuthState>) {
    session_store().clear().await;
    auth.set(AuthState {
        session: None,
        loading: false,
    });
}

/// Rewrite the cached role after an admin changes their own account.
pub async fn refresh_role(auth: &mut Signal<AuthState>, role: Role) {
    if let Some(session) = session_store().update_role(role).await {
        auth.set(AuthState {
            session: Some(session),
            loading: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::User;

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

    #[test]
    fn test_default_state_is_loading_and_anonymous() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user().is_none());
        assert!(state.token().is_none());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_state_exposes_session_user() {
        let state = AuthState {
            session: Some(Session::new(auth_user(Role::Admin), 8)),
            loading: false,
        };
        assert_eq!(state.token(), Some("tok"));
        assert_eq!(state.user().map(AuthUser::id), Some("u1"));
        assert!(state.is_admin());
    }
}
