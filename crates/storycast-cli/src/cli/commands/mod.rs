//! CLI command handlers, one file per command.

mod batch;
mod config;
mod create;

pub use batch::run_batch;
pub use config::run_config;
pub use create::{run_create, StorySource};

use super::OutputArgs;
use anyhow::{Context, Result};
use storycast_core::config::ClientConfig;
use storycast_core::download;
use storycast_core::flow::{Completion, Outcome};

/// Emits the terminal render, fetches links on success, and turns an Error
/// state into a non-zero exit.
pub(super) async fn finish(cfg: &ClientConfig, done: Completion, output: &OutputArgs) -> Result<()> {
    match &output.out {
        Some(path) => {
            tokio::fs::write(path, format!("{}\n", done.html))
                .await
                .with_context(|| format!("write result: {}", path.display()))?;
            tracing::info!("result written to {}", path.display());
        }
        None => println!("{}", done.html),
    }

    match done.outcome {
        Outcome::Error(err) => Err(err.into()),
        Outcome::Success { links } => {
            if let Some(dir) = &output.download_dir {
                if links.is_empty() {
                    eprintln!("No download links to fetch.");
                }
                for path in download::fetch_all(cfg, &links, dir).await? {
                    eprintln!("Saved {}", path.display());
                }
            }
            Ok(())
        }
    }
}
