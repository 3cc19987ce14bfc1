//! Gateway configuration read from the environment.

use std::path::PathBuf;

/// Bind address used when `BORUTO_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Images directory used when `BORUTO_IMAGES_DIR` is unset.
pub const DEFAULT_IMAGES_DIR: &str = "resources/images";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address to listen on, e.g. `"0.0.0.0:8080"`.
    pub listen_addr: String,
    /// Directory served under `/images`.
    pub images_dir: PathBuf,
}

impl GatewayConfig {
    /// Reads the configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset or empty values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            listen_addr: get("BORUTO_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned()),
            images_dir: get("BORUTO_IMAGES_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR), PathBuf::from),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
