//! URL decomposition and socket URL formatting.
//!
//! [`UrlParts`] is the common shape for both the script/query URL and the
//! page location. [`SocketUrl`] is the merged endpoint; its `Display` impl
//! produces the final string.

mod format;
mod parse;

use serde::Serialize;
use std::collections::BTreeMap;

pub use format::SocketUrl;

/// Query keys that override the derived socket destination.
pub const SOCK_HOST_KEY: &str = "sockHost";
pub const SOCK_PATH_KEY: &str = "sockPath";
pub const SOCK_PORT_KEY: &str = "sockPort";

/// Decomposed URL-like string.
///
/// Every field is optional because inputs range from absolute URLs to a
/// bare `/`. `protocol` keeps its trailing colon (`"https:"`) and `port`
/// stays textual, as written in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    pub protocol: Option<String>,
    /// True when the input carried an authority (`scheme://...` or `//...`).
    pub slashes: bool,
    /// User info, still percent-encoded (`user:pass`).
    pub auth: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub pathname: Option<String>,
    /// Decoded query; the first occurrence of a repeated key wins.
    pub query: BTreeMap<String, String>,
}

impl UrlParts {
    /// Non-empty query value for `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn sock_host(&self) -> Option<&str> {
        self.query_value(SOCK_HOST_KEY)
    }

    pub fn sock_path(&self) -> Option<&str> {
        self.query_value(SOCK_PATH_KEY)
    }

    pub fn sock_port(&self) -> Option<&str> {
        self.query_value(SOCK_PORT_KEY)
    }

    /// Hostname, treating an empty string as absent.
    pub fn host(&self) -> Option<&str> {
        self.hostname.as_deref().filter(|h| !h.is_empty())
    }

    /// Protocol or `""` when absent.
    pub fn protocol_str(&self) -> &str {
        self.protocol.as_deref().unwrap_or_default()
    }
}
