//! libcurl transport: multipart and JSON POSTs with the body collected in memory.

use super::{Reply, Transport, TransportError};
use crate::config::ClientConfig;
use crate::form::FormFields;
use crate::link;
use curl::easy::{Easy, Form, List};
use serde_json::Value;
use std::str;
use std::time::Duration;

/// Blocking HTTP transport backed by a fresh curl easy handle per request.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    base_url: String,
    connect_timeout: Duration,
    timeout: Option<Duration>,
}

impl CurlTransport {
    pub fn new(cfg: &ClientConfig) -> Self {
        Self {
            base_url: cfg.base_url.clone(),
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.request_timeout(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn easy_for(&self, path: &str) -> Result<Easy, TransportError> {
        let url = link::resolve(&self.base_url, path)
            .map_err(|e| TransportError::Url(format!("{:#}", e)))?;
        let mut easy = Easy::new();
        easy.url(&url)?;
        easy.follow_location(true)?;
        easy.max_redirections(5)?;
        easy.connect_timeout(self.connect_timeout)?;
        if let Some(t) = self.timeout {
            easy.timeout(t)?;
        }
        Ok(easy)
    }

    fn perform(mut easy: Easy, mut headers: List) -> Result<Reply, TransportError> {
        // Disable `Expect: 100-continue`; the backend answers the whole body at once.
        headers.append("Expect:")?;
        easy.http_headers(headers)?;

        let mut body = Vec::new();
        let mut content_type = None;
        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(line) = str::from_utf8(data) {
                    if let Some((name, value)) = line.split_once(':') {
                        if name.trim().eq_ignore_ascii_case("content-type") {
                            content_type = Some(value.trim().to_string());
                        }
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(Reply {
            status,
            content_type,
            body,
        })
    }
}

impl Transport for CurlTransport {
    fn post_form(&self, path: &str, fields: &FormFields) -> Result<Reply, TransportError> {
        let mut easy = self.easy_for(path)?;
        let mut form = Form::new();
        for (name, value) in fields.iter() {
            form.part(name).contents(value.as_bytes()).add()?;
        }
        easy.httppost(form)?;
        tracing::debug!("POST {} (multipart, {} fields)", path, fields.len());
        Self::perform(easy, List::new())
    }

    fn post_json(&self, path: &str, body: &Value) -> Result<Reply, TransportError> {
        let bytes = serde_json::to_vec(body)?;
        let mut easy = self.easy_for(path)?;
        easy.post(true)?;
        easy.post_fields_copy(&bytes)?;
        let mut headers = List::new();
        headers.append("Content-Type: application/json")?;
        tracing::debug!("POST {} (json, {} bytes)", path, bytes.len());
        Self::perform(easy, headers)
    }
}
