//! Single-item submitter: posts one story form and renders a download link.

use crate::config::ClientConfig;
use crate::flow::{Completion, FlowError, FlowKind, FlowState, FlowTracker, Outcome};
use crate::form::FormFields;
use crate::link::download_href;
use crate::render;
use crate::response::CreateResponse;
use crate::transport::{Transport, TransportError};
use crate::view::ResultView;
use std::sync::Arc;

pub struct SingleSubmitter {
    transport: Arc<dyn Transport>,
    view: Arc<dyn ResultView>,
    endpoint: String,
    download_prefix: String,
    tracker: FlowTracker,
}

impl SingleSubmitter {
    pub fn new(transport: Arc<dyn Transport>, view: Arc<dyn ResultView>, cfg: &ClientConfig) -> Self {
        Self {
            transport,
            view,
            endpoint: cfg.create_endpoint.clone(),
            download_prefix: cfg.download_prefix.clone(),
            tracker: FlowTracker::new(FlowKind::Single),
        }
    }

    pub fn state(&self) -> FlowState {
        self.tracker.state()
    }

    /// Submits `fields` as multipart form data and renders the outcome.
    /// Always ends in Success or Error; never leaves the view pending.
    pub async fn submit(&self, fields: FormFields) -> Completion {
        let ticket = self.tracker.begin(self.view.as_ref(), render::PENDING_SINGLE);

        let (outcome, html) = match self.create(fields).await {
            Ok(href) => {
                let html = render::single_success(href.as_deref());
                (
                    Outcome::Success {
                        links: href.into_iter().collect(),
                    },
                    html,
                )
            }
            Err(err) => {
                let html = err.render();
                (Outcome::Error(err), html)
            }
        };

        self.tracker.finish(ticket, self.view.as_ref(), outcome, html)
    }

    /// Returns the download href, or None when the backend reported success without a file.
    async fn create(&self, fields: FormFields) -> Result<Option<String>, FlowError> {
        let transport = Arc::clone(&self.transport);
        let endpoint = self.endpoint.clone();
        let reply = tokio::task::spawn_blocking(move || transport.post_form(&endpoint, &fields))
            .await
            .map_err(|e| TransportError::Task(e.to_string()))??;

        let response: CreateResponse = reply
            .json()
            .map_err(|source| FlowError::MalformedResponse {
                status: reply.status,
                source,
            })?;
        if !response.ok {
            return Err(FlowError::Service(response.error));
        }

        let href = response
            .file
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(|file| download_href(&self.download_prefix, None, file));
        if href.is_none() {
            tracing::warn!("{} replied ok without a file", self.endpoint);
        }
        Ok(href)
    }
}
