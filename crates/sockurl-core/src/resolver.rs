//! End-to-end socket URL resolution.

use crate::config::SockUrlConfig;
use crate::error::SocketUrlError;
use crate::merge::{merge_with_default_path, DEFAULT_SOCK_PATH};
use crate::source::{resolve_source, PageLocation, ScriptSource};
use crate::url_parts::SocketUrl;

/// Resolves socket URLs with per-deployment defaults.
///
/// Holds no state between calls; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct SocketUrlResolver {
    default_sock_path: String,
}

impl Default for SocketUrlResolver {
    fn default() -> Self {
        Self {
            default_sock_path: DEFAULT_SOCK_PATH.to_string(),
        }
    }
}

impl SocketUrlResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &SockUrlConfig) -> Self {
        Self::default().with_default_sock_path(&cfg.default_sock_path)
    }

    /// Path used when the query carries no `sockPath`. Empty keeps the current one.
    pub fn with_default_sock_path(mut self, path: &str) -> Self {
        if !path.is_empty() {
            self.default_sock_path = path.to_string();
        }
        self
    }

    pub fn default_sock_path(&self) -> &str {
        &self.default_sock_path
    }

    pub fn resolve<S, L>(
        &self,
        resource_query: Option<&str>,
        location_override: Option<&str>,
        script: &S,
        location: &L,
    ) -> Result<SocketUrl, SocketUrlError>
    where
        S: ScriptSource + ?Sized,
        L: PageLocation + ?Sized,
    {
        let (parts, loc) = resolve_source(resource_query, location_override, script, location)?;
        Ok(merge_with_default_path(&parts, &loc, &self.default_sock_path))
    }
}

/// Resolves the socket URL string with the default socket path.
///
/// # Examples
///
/// With resource query `?http://0.0.0.0:8096&sockPort=8097&sockHost=localhost`
/// and location `https://example.com:443/` the result is
/// `https://localhost:8097/sockjs-node`.
pub fn create_socket_url<S, L>(
    resource_query: Option<&str>,
    location_override: Option<&str>,
    script: &S,
    location: &L,
) -> Result<String, SocketUrlError>
where
    S: ScriptSource + ?Sized,
    L: PageLocation + ?Sized,
{
    SocketUrlResolver::default()
        .resolve(resource_query, location_override, script, location)
        .map(|url| url.to_string())
}
