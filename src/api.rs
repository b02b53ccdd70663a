// API client module: contains a small blocking HTTP client that talks to
// the document service. It is intentionally small and synchronous: the
// tool performs exactly one request per invocation and then exits.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

use crate::error::UploadError;

/// Simple API client that holds a reqwest blocking client, the base URL
/// of the document service and an optional bearer token for
/// authenticated uploads.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Body of a successful upload response. The server is free to omit
/// either key; the CLI substitutes `N/A` on display. Unknown keys are
/// ignored.
#[derive(Deserialize, Debug)]
pub struct UploadResponse {
    pub id: Option<String>,
    pub status: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url`. No request timeout is configured:
    /// the upload blocks until the server responds or the transport
    /// fails, matching the behavior of the original tool.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.to_string(),
            token,
        })
    }

    /// Helper to build the Authorization header map when a token is set.
    fn auth_headers(&self) -> Result<HeaderMap, UploadError> {
        let mut headers = HeaderMap::new();
        if let Some(t) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", t))
                .map_err(|e| UploadError::Other(format!("Invalid api key: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Upload a single document using multipart/form-data with one part
    /// named `file` carrying the file's bytes under its base name.
    ///
    /// Refuses to touch the network when the path does not exist. The
    /// file handle is scoped to this call and released on every exit
    /// path. Exactly one POST is issued; there are no retries.
    pub fn upload_document(&self, file_path: &Path) -> Result<UploadResponse, UploadError> {
        if !file_path.exists() {
            return Err(UploadError::FileNotFound {
                path: file_path.display().to_string(),
            });
        }

        let url = format!("{}/api/v1/documents/upload", self.base_url);

        let file = File::open(file_path).map_err(|e| {
            UploadError::Other(format!("Failed to open {}: {}", file_path.display(), e))
        })?;
        let len = file
            .metadata()
            .map_err(|e| UploadError::Other(e.to_string()))?
            .len();
        let file_name = file_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("document")
            .to_string();

        // Known part length so the request carries a Content-Length
        // instead of a chunked body.
        let part = multipart::Part::reader_with_length(file, len).file_name(file_name);
        let form = multipart::Form::new().part("file", part);

        let res = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .multipart(form)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    UploadError::Connect {
                        url: self.base_url.clone(),
                    }
                } else {
                    UploadError::Other(e.to_string())
                }
            })?;

        let status = res.status();
        if status == StatusCode::OK {
            let text = res.text().map_err(|e| UploadError::Other(e.to_string()))?;
            // A 200 body that is not valid JSON lands in the generic
            // branch; the source never treated it as a separate case.
            serde_json::from_str(&text).map_err(|e| UploadError::Other(e.to_string()))
        } else {
            let body = res.text().unwrap_or_else(|_| "".into());
            Err(UploadError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }
}
