//! Integration test: fetching rendered download references to disk.

mod common;

use common::stub_server::{self, CannedReply};
use storycast_core::config::ClientConfig;
use storycast_core::download;
use tempfile::tempdir;

#[tokio::test]
async fn fetch_all_saves_each_link() {
    let body: Vec<u8> = (0u8..200).cycle().take(32 * 1024).collect();
    let server = stub_server::start(vec![
        ("GET", "/download/batch_1/chapter-01.mp4", CannedReply::bytes(body.clone())),
        ("GET", "/download/v1.mp4", CannedReply::bytes(b"tiny".to_vec())),
    ]);
    let cfg = ClientConfig::default().with_base_url(&server.base_url);
    let dir = tempdir().unwrap();

    let links = vec![
        "/download/batch_1/chapter-01.mp4".to_string(),
        "/download/v1.mp4".to_string(),
    ];
    let saved = download::fetch_all(&cfg, &links, dir.path()).await.unwrap();

    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0], dir.path().join("chapter-01.mp4"));
    assert_eq!(std::fs::read(&saved[0]).unwrap(), body);
    assert_eq!(std::fs::read(&saved[1]).unwrap(), b"tiny");
    assert!(!dir.path().join("v1.mp4.part").exists());
}

#[tokio::test]
async fn missing_file_is_an_error_and_leaves_no_partial() {
    let server = stub_server::start(vec![]);
    let cfg = ClientConfig::default().with_base_url(&server.base_url);
    let dir = tempdir().unwrap();

    let err = download::fetch_all(&cfg, &["/download/gone.mp4".to_string()], dir.path())
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("HTTP 404"));
    assert!(!dir.path().join("gone.mp4").exists());
    assert!(!dir.path().join("gone.mp4.part").exists());
}
