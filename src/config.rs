//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before parsing. Parsing itself goes through a
//! lookup function so it can be exercised without touching process env.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while assembling server configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held an unparseable value.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// `[package.metadata.leptos]` could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Overrides the Leptos `site_root` that holds the `pkg/` bundle.
    pub site_root: Option<PathBuf>,
    /// Directory served under `/assets` (logo and other public files).
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `LEADPAGE_ADDR`: bind IP, default `0.0.0.0`
    /// - `PORT`: bind port, default 3000
    /// - `LEADPAGE_SITE_ROOT`: Leptos site root override
    /// - `LEADPAGE_ASSETS_DIR`: default `<crate>/public/assets`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the address or port does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the address or port does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = get("LEADPAGE_ADDR").unwrap_or_else(|| DEFAULT_BIND_HOST.to_owned());
        let ip: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::Invalid { var: "LEADPAGE_ADDR", value: host.clone() })?;

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        let site_root = get("LEADPAGE_SITE_ROOT").map(PathBuf::from);
        let assets_dir = get("LEADPAGE_ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from);

        Ok(Self { addr: SocketAddr::new(ip, port), site_root, assets_dir })
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public").join("assets")
}
