//! Site feedback board.

use reqwest::Method;
use serde_json::json;
use store::{Feedback, FeedbackInput};

use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        Self::send_list(self.request(Method::GET, "feedback")).await
    }

    pub async fn get_feedback(&self, id: &str) -> Result<Feedback, ApiError> {
        Self::send(self.request(Method::GET, &format!("feedback/{id}"))).await
    }

    pub async fn create_feedback(&self, input: &FeedbackInput) -> Result<Feedback, ApiError> {
        Self::send(self.authed(Method::POST, "feedback")?.json(input)).await
    }

    pub async fn update_feedback(&self, id: &str, message: &str) -> Result<(), ApiError> {
        let builder = self
            .authed(Method::PUT, &format!("feedback/{id}"))?
            .json(&json!({ "message": message }));
        Self::send_empty(builder).await
    }

    pub async fn delete_feedback(&self, id: &str) -> Result<(), ApiError> {
        Self::send_empty(self.authed(Method::DELETE, &format!("feedback/{id}"))?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_shape() {
        let client = ApiClient::new("http://x").with_token(Some("t".to_string()));
        let input = FeedbackInput {
            user: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Love it".to_string(),
        };
        let request = client
            .authed(Method::POST, "feedback")
            .unwrap()
            .json(&input)
            .build()
            .unwrap();
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(value["message"], "Love it");
        assert_eq!(value["user"], "Ada");
    }

    #[tokio::test]
    async fn test_delete_needs_a_token() {
        let client = ApiClient::new("http://127.0.0.1:9");
        assert!(matches!(client.delete_feedback("f1").await, Err(ApiError::NotAuthenticated)));
    }
}
