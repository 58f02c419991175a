//! Presence-gated wiring of the two flows.

use crate::batch::BatchSubmitter;
use crate::config::ClientConfig;
use crate::single::SingleSubmitter;
use crate::transport::Transport;
use crate::view::ResultView;
use std::sync::Arc;

/// Results containers available on the page. A missing container disables its flow.
#[derive(Default, Clone)]
pub struct PageAnchors {
    pub single_result: Option<Arc<dyn ResultView>>,
    pub batch_result: Option<Arc<dyn ResultView>>,
}

/// The flows that could be activated for a page.
pub struct Controllers {
    pub single: Option<SingleSubmitter>,
    pub batch: Option<BatchSubmitter>,
}

impl Controllers {
    pub fn wire(transport: Arc<dyn Transport>, cfg: &ClientConfig, anchors: PageAnchors) -> Self {
        let single = anchors
            .single_result
            .map(|view| SingleSubmitter::new(Arc::clone(&transport), view, cfg));
        let batch = anchors
            .batch_result
            .map(|view| BatchSubmitter::new(Arc::clone(&transport), view, cfg));
        tracing::debug!(
            "wired flows: single={} batch={}",
            single.is_some(),
            batch.is_some()
        );
        Self { single, batch }
    }
}
