//! Comment threads attached to notes.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use store::Comment;

use crate::{ApiClient, ApiError};

#[derive(Deserialize)]
pub(crate) struct CountResponse {
    #[serde(default)]
    pub count: u64,
}

impl ApiClient {
    pub async fn list_comments(&self, note_id: &str) -> Result<Vec<Comment>, ApiError> {
        Self::send_list(self.request(Method::GET, &format!("comments/{note_id}"))).await
    }

    pub async fn comment_count(&self, note_id: &str) -> Result<u64, ApiError> {
        let response: CountResponse =
            Self::send(self.request(Method::GET, &format!("comments/{note_id}/count"))).await?;
        Ok(response.count)
    }

    pub async fn create_comment(&self, note_id: &str, content: &str) -> Result<Comment, ApiError> {
        let builder = self
            .authed(Method::POST, &format!("comments/{note_id}"))?
            .json(&json!({ "content": content }));
        Self::send(builder).await
    }

    pub async fn update_comment(&self, id: &str, content: &str) -> Result<(), ApiError> {
        let builder = self
            .authed(Method::PUT, &format!("comments/{id}"))?
            .json(&json!({ "content": content }));
        Self::send_empty(builder).await
    }

    pub async fn delete_comment(&self, id: &str) -> Result<(), ApiError> {
        Self::send_empty(self.authed(Method::DELETE, &format!("comments/{id}"))?).await
    }
}
