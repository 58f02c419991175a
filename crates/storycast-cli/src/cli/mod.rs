//! CLI for the storycast video-creation client.

mod commands;
mod console;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storycast_core::config;
use storycast_core::form::{StoryForm, DEFAULT_DEITY, DEFAULT_DURATION_SECS};

use commands::{run_batch, run_config, run_create, StorySource};

/// Top-level CLI for storycast.
#[derive(Debug, Parser)]
#[command(name = "storycast")]
#[command(about = "storycast: submit stories to a video-creation backend", long_about = None)]
pub struct Cli {
    /// Backend base URL, e.g. http://127.0.0.1:10000 (overrides config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the terminal render and fetched videos go.
#[derive(Debug, Args, Default)]
pub struct OutputArgs {
    /// Write the rendered HTML result to FILE instead of stdout.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Fetch every returned download link into DIR.
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create one video from a story.
    Create {
        /// Story text.
        #[arg(long, required_unless_present = "story_file", conflicts_with = "story_file")]
        story: Option<String>,

        /// Read the story text from a file.
        #[arg(long, value_name = "PATH")]
        story_file: Option<PathBuf>,

        /// Deity label used for imagery.
        #[arg(long, default_value = DEFAULT_DEITY)]
        deity: String,

        /// Voice language code (backend default when omitted).
        #[arg(long, value_name = "LANG")]
        voice_lang: Option<String>,

        /// Target duration in seconds.
        #[arg(long, default_value_t = DEFAULT_DURATION_SECS, value_name = "SECS")]
        duration: u32,

        /// Extra form field, repeatable.
        #[arg(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Create a batch of episodes from a JSON payload.
    Batch {
        /// Path to the JSON payload, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the effective configuration and where it is stored.
    Config,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(url) = cli.base_url {
            cfg = cfg.with_base_url(url);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Create {
                story,
                story_file,
                deity,
                voice_lang,
                duration,
                fields,
                output,
            } => {
                let source = match (story, story_file) {
                    (Some(text), _) => StorySource::Text(text),
                    (None, Some(path)) => StorySource::File(path),
                    (None, None) => anyhow::bail!("either --story or --story-file is required"),
                };
                let mut form = StoryForm::new(String::new())
                    .deity(deity)
                    .duration_secs(duration);
                if let Some(lang) = voice_lang {
                    form = form.voice_lang(lang);
                }
                run_create(&cfg, source, form, &fields, &output).await?;
            }
            CliCommand::Batch { input, output } => run_batch(&cfg, &input, &output).await?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
