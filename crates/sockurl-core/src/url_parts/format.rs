//! Socket URL assembly.

use std::fmt;

/// Protocols that always get `//` in front of the host.
const SLASHED_PROTOCOLS: &[&str] = &["http:", "https:", "ftp:", "gopher:", "file:", "ws:", "wss:"];

/// The merged socket endpoint.
///
/// Formatting emits protocol, auth, host, port and path only; query and
/// fragment never appear. Without a hostname the port is dropped and the
/// result is a bare path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketUrl {
    pub protocol: Option<String>,
    pub auth: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub pathname: String,
}

impl fmt::Display for SocketUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut protocol = self.protocol.clone().unwrap_or_default();
        if !protocol.is_empty() && !protocol.ends_with(':') {
            protocol.push(':');
        }
        f.write_str(&protocol)?;

        let mut slashed = false;
        if let Some(host) = self.hostname.as_deref().filter(|h| !h.is_empty()) {
            if protocol.is_empty() || SLASHED_PROTOCOLS.contains(&protocol.as_str()) {
                f.write_str("//")?;
                slashed = true;
            }
            if let Some(auth) = self.auth.as_deref().filter(|a| !a.is_empty()) {
                write!(f, "{auth}@")?;
            }
            if host.contains(':') {
                write!(f, "[{host}]")?;
            } else {
                f.write_str(host)?;
            }
            if let Some(port) = self.port.as_deref().filter(|p| !p.is_empty()) {
                write!(f, ":{port}")?;
            }
        }

        if slashed && !self.pathname.is_empty() && !self.pathname.starts_with('/') {
            f.write_str("/")?;
        }
        // `?` and `#` would start a query or fragment.
        f.write_str(&self.pathname.replace('?', "%3F").replace('#', "%23"))
    }
}
