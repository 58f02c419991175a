//! `storycast config` – print the effective configuration.

use anyhow::Result;
use storycast_core::config::{self, ClientConfig};

pub fn run_config(cfg: &ClientConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
