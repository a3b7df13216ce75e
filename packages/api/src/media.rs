use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;

use crate::{ApiClient, ApiError};

/// A picked file ready for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    fn into_part(self) -> Result<Part, ApiError> {
        let part = Part::bytes(self.bytes).file_name(self.name);
        match self.content_type {
            Some(mime) if !mime.is_empty() => Ok(part.mime_str(&mime)?),
            _ => Ok(part),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UploadResponse {
    Many { urls: Vec<String> },
    Single { image_url: String },
}

impl UploadResponse {
    fn into_urls(self) -> Vec<String> {
        match self {
            UploadResponse::Many { urls } => urls,
            UploadResponse::Single { image_url } => vec![image_url],
        }
    }
}

impl ApiClient {
    /// Upload files in one multipart request, one `media` part each, and
    /// return their stored paths in upload order.
    pub async fn upload_media(&self, files: Vec<MediaFile>) -> Result<Vec<String>, ApiError> {
        if files.is_empty() {
            return Ok(Vec::new());
        }
        let builder = self.authed(Method::POST, "image")?;
        let mut form = Form::new();
        for file in files {
            form = form.part("media", file.into_part()?);
        }
        let response: UploadResponse = Self::send(builder.multipart(form)).await?;
        Ok(response.into_urls())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_shapes() {
        let many: UploadResponse =
            serde_json::from_str(r#"{"urls": ["uploads/a.png", "uploads/b.mp4"]}"#).unwrap();
        assert_eq!(many.into_urls(), vec!["uploads/a.png", "uploads/b.mp4"]);

        let single: UploadResponse =
            serde_json::from_str(r#"{"image_url": "uploads/c.jpg"}"#).unwrap();
        assert_eq!(single.into_urls(), vec!["uploads/c.jpg"]);
    }

    #[tokio::test]
    async fn test_nothing_to_upload() {
        let client = ApiClient::new("http://127.0.0.1:9");
        assert!(client.upload_media(Vec::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_needs_a_token() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let file = MediaFile::new("a.png", vec![1, 2, 3]).with_content_type("image/png");
        assert!(matches!(
            client.upload_media(vec![file]).await,
            Err(ApiError::NotAuthenticated)
        ));
    }
}
