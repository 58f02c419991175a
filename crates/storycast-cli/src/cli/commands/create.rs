//! `storycast create` – submit one story form.

use super::finish;
use crate::cli::console::ConsoleView;
use crate::cli::OutputArgs;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use storycast_core::config::ClientConfig;
use storycast_core::form::StoryForm;
use storycast_core::page::{Controllers, PageAnchors};
use storycast_core::transport::CurlTransport;

#[derive(Debug)]
pub enum StorySource {
    Text(String),
    File(PathBuf),
}

impl StorySource {
    async fn read(self) -> Result<String> {
        match self {
            StorySource::Text(text) => Ok(text),
            StorySource::File(path) => tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("read story file: {}", path.display())),
        }
    }
}

pub async fn run_create(
    cfg: &ClientConfig,
    source: StorySource,
    mut form: StoryForm,
    extra_fields: &[String],
    output: &OutputArgs,
) -> Result<()> {
    form.story = source.read().await?;
    let mut fields = form.into_fields();
    for pair in extra_fields {
        fields.push_pair(pair)?;
    }

    let controllers = Controllers::wire(
        Arc::new(CurlTransport::new(cfg)),
        cfg,
        PageAnchors {
            single_result: Some(Arc::new(ConsoleView::new())),
            batch_result: None,
        },
    );
    let single = controllers.single.context("single flow is not wired")?;

    let done = single.submit(fields).await;
    finish(cfg, done, output).await
}
