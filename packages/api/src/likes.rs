use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use store::ItemKind;

use crate::comments::CountResponse;
use crate::{ApiClient, ApiError};

/// Result of `POST /likes/:id/toggle`. Older servers only answer with a
/// message, so both fields are optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LikeToggle {
    #[serde(default, alias = "isLiked")]
    pub liked: Option<bool>,
    #[serde(default, alias = "likesCount", alias = "likes")]
    pub count: Option<u64>,
}

impl ApiClient {
    pub async fn toggle_like(&self, item_id: &str, kind: ItemKind) -> Result<LikeToggle, ApiError> {
        let builder = self
            .authed(Method::POST, &format!("likes/{item_id}/toggle"))?
            .json(&json!({ "itemType": kind }));
        let response = Self::checked_bytes(builder).await?;
        if response.iter().all(u8::is_ascii_whitespace) {
            return Ok(LikeToggle::default());
        }
        Ok(serde_json::from_slice(&response)?)
    }

    pub async fn like_count(&self, item_id: &str, kind: ItemKind) -> Result<u64, ApiError> {
        let builder = self
            .request(Method::GET, "likes/count")
            .query(&[("itemId", item_id), ("itemType", kind.as_str())]);
        let response: CountResponse = Self::send(builder).await?;
        Ok(response.count)
    }

    /// Count for display; a failed lookup shows as zero.
    pub async fn like_count_or_zero(&self, item_id: &str, kind: ItemKind) -> u64 {
        match self.like_count(item_id, kind).await {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!("Like count for {} {} unavailable: {}", kind.as_str(), item_id, e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_response_variants() {
        let toggle: LikeToggle = serde_json::from_str(r#"{"liked": true, "count": 4}"#).unwrap();
        assert_eq!(toggle.liked, Some(true));
        assert_eq!(toggle.count, Some(4));

        let toggle: LikeToggle =
            serde_json::from_str(r#"{"message": "Like removed", "isLiked": false}"#).unwrap();
        assert_eq!(toggle.liked, Some(false));
        assert_eq!(toggle.count, None);
    }

    #[test]
    fn test_count_request_shape() {
        let client = ApiClient::new("http://x/api");
        let request = client
            .request(Method::GET, "likes/count")
            .query(&[("itemId", "c1"), ("itemType", ItemKind::Comment.as_str())])
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://x/api/likes/count?itemId=c1&itemType=comment"
        );
    }

    #[tokio::test]
    async fn test_toggle_needs_a_token() {
        let client = ApiClient::new("http://127.0.0.1:9");
        assert!(matches!(
            client.toggle_like("n1", ItemKind::Note).await,
            Err(ApiError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_count_is_zero() {
        let client = ApiClient::new("http://127.0.0.1:9");
        assert_eq!(client.like_count_or_zero("n1", ItemKind::Note).await, 0);
    }
}
