//! Tests for the create subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_create_defaults() {
    match parse(&["storycast", "create", "--story", "A lamp burns"]) {
        CliCommand::Create {
            story,
            story_file,
            deity,
            voice_lang,
            duration,
            fields,
            output,
        } => {
            assert_eq!(story.as_deref(), Some("A lamp burns"));
            assert!(story_file.is_none());
            assert_eq!(deity, "Generic");
            assert!(voice_lang.is_none());
            assert_eq!(duration, 20);
            assert!(fields.is_empty());
            assert!(output.out.is_none());
            assert!(output.download_dir.is_none());
        }
        _ => panic!("expected Create"),
    }
}

#[test]
fn cli_parse_create_all_options() {
    match parse(&[
        "storycast",
        "create",
        "--story-file",
        "story.txt",
        "--deity",
        "Ganesha",
        "--voice-lang",
        "en",
        "--duration",
        "30",
        "--field",
        "style=ink",
        "--field",
        "music=off",
        "--out",
        "result.html",
        "--download-dir",
        "/tmp/videos",
    ]) {
        CliCommand::Create {
            story,
            story_file,
            deity,
            voice_lang,
            duration,
            fields,
            output,
        } => {
            assert!(story.is_none());
            assert_eq!(story_file.as_deref(), Some(std::path::Path::new("story.txt")));
            assert_eq!(deity, "Ganesha");
            assert_eq!(voice_lang.as_deref(), Some("en"));
            assert_eq!(duration, 30);
            assert_eq!(fields, ["style=ink", "music=off"]);
            assert_eq!(output.out.as_deref(), Some(std::path::Path::new("result.html")));
            assert_eq!(
                output.download_dir.as_deref(),
                Some(std::path::Path::new("/tmp/videos"))
            );
        }
        _ => panic!("expected Create with options"),
    }
}

#[test]
fn cli_create_requires_a_story() {
    assert!(Cli::try_parse_from(["storycast", "create"]).is_err());
}

#[test]
fn cli_create_rejects_both_story_sources() {
    assert!(Cli::try_parse_from([
        "storycast",
        "create",
        "--story",
        "x",
        "--story-file",
        "y.txt"
    ])
    .is_err());
}
