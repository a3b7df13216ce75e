use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::ClientConfig;

use crate::error::{message_from_body, ApiError};

/// HTTP client bound to one API base URL and, optionally, one bearer token.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base())
    }

    /// Same connection pool and base URL, different credentials.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request that carries the token when one is held, for endpoints that
    /// also serve anonymous visitors.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Request for endpoints that require a login.
    pub(crate) fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        if self.token.is_none() {
            return Err(ApiError::NotAuthenticated);
        }
        Ok(self.request(method, path))
    }

    async fn checked(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = message_from_body(status.as_u16(), status.canonical_reason(), &body);
        tracing::warn!("API request failed ({}): {}", status, message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Raw body of a successful response.
    pub(crate) async fn checked_bytes(builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = Self::checked(builder).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let bytes = Self::checked_bytes(builder).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send and decode a list; an empty or `null` body is an empty list.
    pub(crate) async fn send_list<T: DeserializeOwned>(
        builder: RequestBuilder,
    ) -> Result<Vec<T>, ApiError> {
        let bytes = Self::checked_bytes(builder).await?;
        decode_list(&bytes)
    }

    /// Send and ignore whatever the server answers with.
    pub(crate) async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
        Self::checked(builder).await?;
        Ok(())
    }
}

pub(crate) fn decode_list<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let list: Option<Vec<T>> = serde_json::from_slice(bytes)?;
    Ok(list.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Note;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:5123/api/");
        assert_eq!(client.base_url(), "http://localhost:5123/api");
        assert_eq!(client.url("/notes/1"), "http://localhost:5123/api/notes/1");
        assert_eq!(client.url("likes/count"), "http://localhost:5123/api/likes/count");
    }

    #[test]
    fn test_from_config_uses_api_base() {
        let config = ClientConfig::new("https://chattrix.example.com/api/");
        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url(), "https://chattrix.example.com/api");
    }

    #[test]
    fn test_with_token_drops_empty_tokens() {
        let client = ApiClient::new("http://x");
        assert!(!client.with_token(Some(String::new())).is_authenticated());
        let authed = client.with_token(Some("abc".to_string()));
        assert_eq!(authed.token(), Some("abc"));
        assert_ne!(authed, client);
        assert!(!authed.with_token(None).is_authenticated());
    }

    #[test]
    fn test_authed_request_requires_token() {
        let client = ApiClient::new("http://x");
        assert!(matches!(
            client.authed(Method::DELETE, "notes/1"),
            Err(ApiError::NotAuthenticated)
        ));
        let authed = client.with_token(Some("abc".to_string()));
        let request = authed.authed(Method::DELETE, "notes/1").unwrap().build().unwrap();
        assert_eq!(request.headers()["authorization"], "Bearer abc");
        assert_eq!(request.url().as_str(), "http://x/notes/1");
    }

    #[test]
    fn test_anonymous_request_has_no_auth_header() {
        let client = ApiClient::new("http://x");
        let request = client.request(Method::GET, "notes").build().unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_decode_list_tolerates_empty_bodies() {
        assert!(decode_list::<Note>(b"").unwrap().is_empty());
        assert!(decode_list::<Note>(b"null").unwrap().is_empty());
        let notes: Vec<Note> = decode_list(br#"[{"_id":"n1","title":"t"}]"#).unwrap();
        assert_eq!(notes[0].id, "n1");
        assert!(decode_list::<Note>(b"{").is_err());
    }
}
