//! Per-flow state machine and error taxonomy.
//!
//! Each flow moves Idle → Pending → {Success, Error}. A new trigger restarts at
//! Pending. Triggers are numbered; only the latest trigger may write its
//! terminal render, so a slow response never overwrites a newer one.

use crate::render;
use crate::transport::TransportError;
use crate::view::ResultView;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl FlowState {
    pub fn is_terminal(self) -> bool {
        matches!(self, FlowState::Success | FlowState::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Single,
    Batch,
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowKind::Single => write!(f, "single"),
            FlowKind::Batch => write!(f, "batch"),
        }
    }
}

/// Why a flow ended in Error.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Batch input was not valid JSON; nothing was sent.
    #[error("invalid JSON input: {0}")]
    InvalidInput(#[source] serde_json::Error),
    /// The backend answered with a false success flag.
    #[error("service reported failure: {}", .0.as_deref().unwrap_or("no message"))]
    Service(Option<String>),
    /// The request never produced a reply.
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    /// A reply arrived but its body was not the expected JSON object.
    #[error("unexpected response (HTTP {status}): {source}")]
    MalformedResponse {
        status: u32,
        #[source]
        source: serde_json::Error,
    },
}

impl FlowError {
    /// Inline fragment shown in the results container.
    pub fn render(&self) -> String {
        match self {
            FlowError::InvalidInput(_) => render::invalid_json(),
            FlowError::Service(message) => render::error(message.as_deref()),
            FlowError::Transport(_) | FlowError::MalformedResponse { .. } => {
                render::request_failed()
            }
        }
    }
}

/// How a single trigger ended.
#[derive(Debug)]
pub enum Outcome {
    /// Download references produced by the backend (possibly empty).
    Success { links: Vec<String> },
    Error(FlowError),
}

impl Outcome {
    pub fn state(&self) -> FlowState {
        match self {
            Outcome::Success { .. } => FlowState::Success,
            Outcome::Error(_) => FlowState::Error,
        }
    }

    pub fn links(&self) -> &[String] {
        match self {
            Outcome::Success { links } => links,
            Outcome::Error(_) => &[],
        }
    }
}

/// Result of one trigger as returned to the caller.
#[derive(Debug)]
pub struct Completion {
    pub outcome: Outcome,
    /// Terminal fragment for this trigger.
    pub html: String,
    /// False when a newer trigger started before this one settled; the fragment
    /// was then not written to the view.
    pub rendered: bool,
}

#[derive(Debug)]
struct Inner {
    generation: u64,
    state: FlowState,
}

/// Owns the flow state and serializes writes to the view.
#[derive(Debug)]
pub(crate) struct FlowTracker {
    kind: FlowKind,
    inner: Mutex<Inner>,
}

/// Identifies one trigger of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticket(u64);

impl FlowTracker {
    pub(crate) fn new(kind: FlowKind) -> Self {
        Self {
            kind,
            inner: Mutex::new(Inner {
                generation: 0,
                state: FlowState::Idle,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn state(&self) -> FlowState {
        self.lock().state
    }

    /// Enters Pending and shows the pending indicator.
    pub(crate) fn begin(&self, view: &dyn ResultView, pending_html: &str) -> Ticket {
        let mut inner = self.lock();
        inner.generation += 1;
        if inner.state == FlowState::Pending {
            tracing::debug!("{} flow retriggered while pending", self.kind);
        }
        inner.state = FlowState::Pending;
        view.reveal();
        view.set_html(pending_html);
        tracing::info!("{} flow pending (trigger #{})", self.kind, inner.generation);
        Ticket(inner.generation)
    }

    /// Writes the terminal render if `ticket` is still the latest trigger.
    pub(crate) fn finish(
        &self,
        ticket: Ticket,
        view: &dyn ResultView,
        outcome: Outcome,
        html: String,
    ) -> Completion {
        let mut inner = self.lock();
        if inner.generation != ticket.0 {
            tracing::info!(
                "{} flow: dropping result of trigger #{} (latest is #{})",
                self.kind,
                ticket.0,
                inner.generation
            );
            return Completion {
                outcome,
                html,
                rendered: false,
            };
        }
        inner.state = outcome.state();
        view.set_html(&html);
        match &outcome {
            Outcome::Success { links } => {
                tracing::info!("{} flow succeeded ({} links)", self.kind, links.len())
            }
            Outcome::Error(err) => tracing::warn!("{} flow failed: {}", self.kind, err),
        }
        Completion {
            outcome,
            html,
            rendered: true,
        }
    }
}
