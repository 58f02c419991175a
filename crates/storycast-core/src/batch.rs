//! Batch submitter: posts a free-text JSON payload and renders the episode list.

use crate::config::ClientConfig;
use crate::flow::{Completion, FlowError, FlowKind, FlowState, FlowTracker, Outcome};
use crate::render;
use crate::response::BatchResponse;
use crate::transport::{Transport, TransportError};
use crate::view::ResultView;
use serde_json::Value;
use std::sync::Arc;

pub struct BatchSubmitter {
    transport: Arc<dyn Transport>,
    view: Arc<dyn ResultView>,
    endpoint: String,
    download_prefix: String,
    tracker: FlowTracker,
}

impl BatchSubmitter {
    pub fn new(transport: Arc<dyn Transport>, view: Arc<dyn ResultView>, cfg: &ClientConfig) -> Self {
        Self {
            transport,
            view,
            endpoint: cfg.batch_endpoint.clone(),
            download_prefix: cfg.download_prefix.clone(),
            tracker: FlowTracker::new(FlowKind::Batch),
        }
    }

    pub fn state(&self) -> FlowState {
        self.tracker.state()
    }

    /// Parses `input` as JSON and, if valid, posts it to the batch endpoint.
    /// Invalid input ends in Error without any request.
    pub async fn submit(&self, input: &str) -> Completion {
        let ticket = self.tracker.begin(self.view.as_ref(), render::PENDING_BATCH);

        let result = match serde_json::from_str::<Value>(input) {
            Ok(payload) => self.create(payload).await,
            Err(e) => Err(FlowError::InvalidInput(e)),
        };

        let (outcome, html) = match result {
            Ok(response) => {
                let project = response.project.as_deref();
                let links = response
                    .episodes
                    .iter()
                    .filter_map(|ep| render::episode_href(&self.download_prefix, project, ep))
                    .collect();
                let html = render::batch_success(&self.download_prefix, &response);
                (Outcome::Success { links }, html)
            }
            Err(err) => {
                let html = err.render();
                (Outcome::Error(err), html)
            }
        };

        self.tracker.finish(ticket, self.view.as_ref(), outcome, html)
    }

    async fn create(&self, payload: Value) -> Result<BatchResponse, FlowError> {
        let transport = Arc::clone(&self.transport);
        let endpoint = self.endpoint.clone();
        let reply = tokio::task::spawn_blocking(move || transport.post_json(&endpoint, &payload))
            .await
            .map_err(|e| TransportError::Task(e.to_string()))??;

        let response: BatchResponse = reply
            .json()
            .map_err(|source| FlowError::MalformedResponse {
                status: reply.status,
                source,
            })?;
        if !response.ok {
            return Err(FlowError::Service(response.error));
        }
        Ok(response)
    }
}
