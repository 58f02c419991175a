//! Results containers.
//!
//! A `ResultView` is the handle a controller renders into. `HtmlPanel` is the
//! in-memory implementation: it keeps the current fragment, the hidden flag and
//! every fragment ever written, which is what tests and the CLI read back.

use std::sync::{Mutex, MutexGuard};

/// A results container a flow renders into.
pub trait ResultView: Send + Sync {
    /// Makes the container visible (a hidden container is shown on first trigger).
    fn reveal(&self);
    /// Replaces the container's content with `html`.
    fn set_html(&self, html: &str);
}

#[derive(Debug)]
struct PanelState {
    hidden: bool,
    html: String,
    history: Vec<String>,
}

/// In-memory results container, hidden until the first trigger.
#[derive(Debug)]
pub struct HtmlPanel {
    state: Mutex<PanelState>,
}

impl Default for HtmlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlPanel {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PanelState {
                hidden: true,
                html: String::new(),
                history: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn html(&self) -> String {
        self.lock().html.clone()
    }

    pub fn is_hidden(&self) -> bool {
        self.lock().hidden
    }

    /// Every fragment written so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.lock().history.clone()
    }
}

impl ResultView for HtmlPanel {
    fn reveal(&self) {
        self.lock().hidden = false;
    }

    fn set_html(&self, html: &str) {
        let mut state = self.lock();
        state.html = html.to_string();
        state.history.push(html.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_hidden_and_empty() {
        let panel = HtmlPanel::new();
        assert!(panel.is_hidden());
        assert!(panel.html().is_empty());
        assert!(panel.history().is_empty());
    }

    #[test]
    fn panel_records_history() {
        let panel = HtmlPanel::new();
        panel.reveal();
        panel.set_html("a");
        panel.set_html("b");
        assert!(!panel.is_hidden());
        assert_eq!(panel.html(), "b");
        assert_eq!(panel.history(), ["a", "b"]);
    }
}
