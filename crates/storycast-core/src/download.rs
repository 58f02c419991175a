//! Fetches rendered download references to local files.
//!
//! Each href is resolved against the backend base URL and streamed with a
//! single GET into `<name>.part`, then renamed into place.

use crate::config::ClientConfig;
use crate::link;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Downloads one href into `dir`. Returns the final path.
/// Blocking; call from `spawn_blocking` if used from async code.
pub fn fetch_to_dir(cfg: &ClientConfig, href: &str, dir: &Path) -> Result<PathBuf> {
    let url = link::resolve(&cfg.base_url, href)?;
    let name = link::local_file_name(href);
    let final_path = dir.join(&name);
    let temp_path = dir.join(format!("{name}.part"));

    let mut file = File::create(&temp_path)
        .with_context(|| format!("create temp file: {}", temp_path.display()))?;

    let mut easy = curl::easy::Easy::new();
    easy.url(&url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(cfg.connect_timeout())?;
    if let Some(t) = cfg.request_timeout() {
        easy.timeout(t)?;
    }

    let mut written: u64 = 0;
    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match file.write_all(data) {
            Ok(()) => {
                written += data.len() as u64;
                Ok(data.len())
            }
            Err(e) => {
                tracing::warn!("download write failed: {}", e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    let code = match performed {
        Ok(()) => easy.response_code().context("no response code")?,
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(e).with_context(|| format!("GET {} failed", url));
        }
    };
    if !(200..300).contains(&code) {
        let _ = fs::remove_file(&temp_path);
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    file.sync_all()
        .with_context(|| format!("sync {}", temp_path.display()))?;
    drop(file);
    fs::rename(&temp_path, &final_path)
        .with_context(|| format!("rename {} -> {}", temp_path.display(), final_path.display()))?;
    tracing::info!("saved {} ({} bytes) to {}", href, written, final_path.display());

    Ok(final_path)
}

/// Downloads every href into `dir` one after another, creating `dir` if needed.
pub async fn fetch_all(cfg: &ClientConfig, hrefs: &[String], dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("create download dir: {}", dir.display()))?;

    let mut saved = Vec::with_capacity(hrefs.len());
    for href in hrefs {
        let path = tokio::task::spawn_blocking({
            let cfg = cfg.clone();
            let href = href.clone();
            let dir = dir.to_path_buf();
            move || fetch_to_dir(&cfg, &href, &dir)
        })
        .await
        .context("download task join")??;
        saved.push(path);
    }
    Ok(saved)
}
