//! Notes feed and note CRUD.

use reqwest::Method;
use store::{Note, NoteInput, SortOption};

use crate::{ApiClient, ApiError};

/// Query for `GET /notes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteQuery {
    pub search: String,
    pub sort: SortOption,
}

impl NoteQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("sort", self.sort.as_param().to_string())];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        params
    }
}

impl ApiClient {
    /// Public feed; the token is sent when present.
    pub async fn list_notes(&self, query: &NoteQuery) -> Result<Vec<Note>, ApiError> {
        let builder = self.request(Method::GET, "notes").query(&query.params());
        Self::send_list(builder).await
    }

    pub async fn get_note(&self, id: &str) -> Result<Note, ApiError> {
        Self::send(self.request(Method::GET, &format!("notes/{id}"))).await
    }

    pub async fn create_note(&self, input: &NoteInput) -> Result<Note, ApiError> {
        Self::send(self.authed(Method::POST, "notes")?.json(input)).await
    }

    pub async fn update_note(&self, id: &str, input: &NoteInput) -> Result<Note, ApiError> {
        Self::send(self.authed(Method::PUT, &format!("notes/{id}"))?.json(input)).await
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        Self::send_empty(self.authed(Method::DELETE, &format!("notes/{id}"))?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let query = NoteQuery::default();
        assert_eq!(query.params(), vec![("sort", "newest".to_string())]);

        let query = NoteQuery {
            search: "  rust ".to_string(),
            sort: SortOption::MostLiked,
        };
        assert_eq!(
            query.params(),
            vec![("sort", "mostLiked".to_string()), ("search", "rust".to_string())]
        );
    }

    #[test]
    fn test_list_request_shape() {
        let client = ApiClient::new("http://x/api");
        let query = NoteQuery {
            search: "cats".to_string(),
            sort: SortOption::Newest,
        };
        let request = client
            .request(Method::GET, "notes")
            .query(&query.params())
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://x/api/notes?sort=newest&search=cats");
    }

    #[tokio::test]
    async fn test_mutations_need_a_token() {
        let client = ApiClient::new("http://127.0.0.1:9");
        assert!(matches!(
            client.create_note(&NoteInput::default()).await,
            Err(ApiError::NotAuthenticated)
        ));
        assert!(matches!(client.delete_note("n1").await, Err(ApiError::NotAuthenticated)));
    }
}
