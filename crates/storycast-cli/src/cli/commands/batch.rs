//! `storycast batch [PATH|-]` – submit a JSON batch payload.

use super::finish;
use crate::cli::console::ConsoleView;
use crate::cli::OutputArgs;
use anyhow::{Context, Result};
use std::io::Read;
use std::sync::Arc;
use storycast_core::config::ClientConfig;
use storycast_core::page::{Controllers, PageAnchors};
use storycast_core::transport::CurlTransport;

async fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        return tokio::task::spawn_blocking(|| -> Result<String> {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read batch payload from stdin")?;
            Ok(text)
        })
        .await
        .context("stdin task join")?;
    }
    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("read batch payload: {}", input))
}

pub async fn run_batch(cfg: &ClientConfig, input: &str, output: &OutputArgs) -> Result<()> {
    let text = read_input(input).await?;

    let controllers = Controllers::wire(
        Arc::new(CurlTransport::new(cfg)),
        cfg,
        PageAnchors {
            single_result: None,
            batch_result: Some(Arc::new(ConsoleView::new())),
        },
    );
    let batch = controllers.batch.context("batch flow is not wired")?;

    let done = batch.submit(&text).await;
    finish(cfg, done, output).await
}
