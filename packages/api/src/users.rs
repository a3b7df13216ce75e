//! Accounts: login, signup, profiles and admin user management.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use store::{AuthUser, Note, Role, User};

use crate::{ApiClient, ApiError};

/// Partial profile update for `PUT /users/:id`. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// `PUT /users/:id/block` answers either `{ "user": {...} }` or the user itself.
#[derive(Deserialize)]
#[serde(untagged)]
enum BlockResponse {
    Wrapped { user: User },
    Bare(User),
}

impl BlockResponse {
    fn into_user(self) -> User {
        match self {
            BlockResponse::Wrapped { user } | BlockResponse::Bare(user) => user,
        }
    }
}

impl ApiClient {
    /// Exchange credentials for the user record and its bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        let builder = self
            .request(Method::POST, "users/login")
            .json(&json!({ "email": email, "password": password }));
        Self::send(builder).await
    }

    /// Create an account. The caller logs in separately afterwards.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, "users/signup")
            .json(&json!({ "name": name, "email": email, "password": password }));
        Self::send_empty(builder).await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        Self::send(self.authed(Method::GET, &format!("users/{id}"))?).await
    }

    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<User, ApiError> {
        let builder = self.authed(Method::PUT, &format!("users/{id}"))?.json(update);
        Self::send(builder).await
    }

    /// Notes authored by the user.
    pub async fn user_notes(&self, id: &str) -> Result<Vec<Note>, ApiError> {
        Self::send_list(self.authed(Method::GET, &format!("users/{id}/notes"))?).await
    }

    /// Notes the user has liked.
    pub async fn user_liked_notes(&self, id: &str) -> Result<Vec<Note>, ApiError> {
        Self::send_list(self.authed(Method::GET, &format!("users/{id}/likes"))?).await
    }

    /// Admin listing, narrowed server-side by name or email.
    pub async fn list_users(&self, search: &str) -> Result<Vec<User>, ApiError> {
        let builder = self
            .authed(Method::GET, "users")?
            .query(&[("search", search.trim())]);
        Self::send_list(builder).await
    }

    pub async fn update_role(&self, id: &str, role: Role) -> Result<User, ApiError> {
        let builder = self
            .authed(Method::PUT, &format!("users/{id}/role"))?
            .json(&json!({ "role": role }));
        Self::send(builder).await
    }

    pub async fn set_blocked(&self, id: &str, blocked: bool) -> Result<User, ApiError> {
        let builder = self
            .authed(Method::PUT, &format!("users/{id}/block"))?
            .json(&json!({ "isBlocked": blocked }));
        let response: BlockResponse = Self::send(builder).await?;
        Ok(response.into_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_response_shapes() {
        let wrapped: BlockResponse = serde_json::from_str(
            r#"{ "message": "User blocked", "user": { "_id": "u1", "name": "Bo", "isBlocked": true } }"#,
        )
        .unwrap();
        assert!(wrapped.into_user().is_blocked);

        let bare: BlockResponse =
            serde_json::from_str(r#"{ "_id": "u1", "name": "Bo", "isBlocked": false }"#).unwrap();
        let user = bare.into_user();
        assert_eq!(user.id, "u1");
        assert!(!user.is_blocked);
    }

    #[test]
    fn test_user_update_skips_unset_fields() {
        let update = UserUpdate {
            name: Some("Ada L.".to_string()),
            ..UserUpdate::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"name":"Ada L."}"#);
    }

    #[tokio::test]
    async fn test_admin_calls_need_a_token() {
        let client = ApiClient::new("http://127.0.0.1:9");
        assert!(matches!(client.list_users("").await, Err(ApiError::NotAuthenticated)));
        assert!(matches!(
            client.update_role("u1", Role::Admin).await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(client.set_blocked("u1", true).await, Err(ApiError::NotAuthenticated)));
    }
}
