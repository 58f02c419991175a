//! Network seam between the flow controllers and the backend.
//!
//! Controllers only see the `Transport` trait; `CurlTransport` is the libcurl
//! implementation. Calls are blocking; controllers run them on
//! `spawn_blocking`.

mod curl_http;

pub use curl_http::CurlTransport;

use crate::form::FormFields;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Raw HTTP reply. Non-2xx statuses are not errors here: the backend reports
/// failures as JSON bodies with 4xx/5xx codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u32,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid request URL: {0}")]
    Url(String),
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    #[error("multipart form: {0}")]
    Form(#[from] curl::FormError),
    #[error("encode JSON body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request task failed: {0}")]
    Task(String),
}

/// Posts requests to the backend. Paths are endpoint paths such as `/create`.
pub trait Transport: Send + Sync {
    /// POST `fields` as `multipart/form-data`.
    fn post_form(&self, path: &str, fields: &FormFields) -> Result<Reply, TransportError>;

    /// POST `body` as `application/json`.
    fn post_json(&self, path: &str, body: &Value) -> Result<Reply, TransportError>;
}
