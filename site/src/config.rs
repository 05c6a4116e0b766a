use anyhow::{Context, Result};
use std::{env, path::PathBuf};

pub const HOST_VAR: &str = "LEDTRUCK_HOST";
pub const PORT_VAR: &str = "LEDTRUCK_PORT";
pub const DIST_VAR: &str = "LEDTRUCK_DIST_DIR";
pub const ASSETS_VAR: &str = "LEDTRUCK_ASSETS_DIR";

/// Where the static host listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output: `index.html` plus the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let host = lookup(HOST_VAR).unwrap_or_else(|| "127.0.0.1".to_owned());
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{PORT_VAR} must be a port number, got {raw:?}"))?,
            None => 3000,
        };
        let dist_dir = lookup(DIST_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("../dist"));
        let assets_dir = lookup(ASSETS_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../assets"));

        Ok(Self { host, port, dist_dir, assets_dir })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}
