//! Tests for batch, config, and the global --base-url flag.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_batch_defaults_to_stdin() {
    match parse(&["storycast", "batch"]) {
        CliCommand::Batch { input, output } => {
            assert_eq!(input, "-");
            assert!(output.out.is_none());
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_batch_file_and_download_dir() {
    match parse(&["storycast", "batch", "chapters.json", "--download-dir", "out"]) {
        CliCommand::Batch { input, output } => {
            assert_eq!(input, "chapters.json");
            assert_eq!(output.download_dir.as_deref(), Some(std::path::Path::new("out")));
        }
        _ => panic!("expected Batch with file"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["storycast", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_global_base_url_after_subcommand() {
    let cli = Cli::try_parse_from([
        "storycast",
        "batch",
        "p.json",
        "--base-url",
        "http://10.0.0.5:10000",
    ])
    .unwrap();
    assert_eq!(cli.base_url.as_deref(), Some("http://10.0.0.5:10000"));
    assert!(matches!(cli.command, CliCommand::Batch { .. }));
}
