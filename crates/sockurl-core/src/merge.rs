//! Merging the script/query URL with the page location into a socket URL.

use crate::url_parts::{SocketUrl, UrlParts};

/// Socket path used when the query does not name one.
pub const DEFAULT_SOCK_PATH: &str = "/sockjs-node";

const IPV4_ANY: &str = "0.0.0.0";
const IPV6_ANY: &str = "::";
const IPV4_LOOPBACK: &str = "127.0.0.1";

/// Merges `parts` with the page location `loc` using [`DEFAULT_SOCK_PATH`].
pub fn merge_to_socket_url(parts: &UrlParts, loc: &UrlParts) -> SocketUrl {
    merge_with_default_path(parts, loc, DEFAULT_SOCK_PATH)
}

/// Merges `parts` with the page location `loc`.
///
/// - A missing, empty or `"0"` port is taken from the page.
/// - An all-interfaces hostname (`0.0.0.0`, `::`) is replaced by the page
///   hostname when the page is served over http(s).
/// - Unless the hostname is `127.0.0.1`, the page protocol is adopted when
///   the page is `https:` or the script hostname was `0.0.0.0`, so a
///   secure page never gets an insecure socket.
/// - `sockHost`, `sockPath` and `sockPort` query values override the result.
pub fn merge_with_default_path(
    parts: &UrlParts,
    loc: &UrlParts,
    default_sock_path: &str,
) -> SocketUrl {
    let port = parts
        .port
        .as_deref()
        .filter(|p| !p.is_empty() && *p != "0")
        .or(loc.port.as_deref());

    let mut hostname = parts.hostname.as_deref();
    if matches!(hostname, Some(IPV4_ANY | IPV6_ANY))
        && loc.host().is_some()
        && loc.protocol_str().starts_with("http")
    {
        hostname = loc.host();
    }

    // The loopback/emptiness checks see the rewritten hostname, the
    // 0.0.0.0 check sees the one the script was served from.
    let mut protocol = parts.protocol.as_deref();
    if hostname.is_some_and(|h| !h.is_empty() && h != IPV4_LOOPBACK)
        && (loc.protocol_str() == "https:" || parts.hostname.as_deref() == Some(IPV4_ANY))
    {
        protocol = loc.protocol.as_deref();
    }

    let sock_host = parts.sock_host().or(hostname);
    let sock_path = parts.sock_path().unwrap_or(default_sock_path);
    let sock_port = parts.sock_port().or(port);

    let url = SocketUrl {
        protocol: protocol.map(str::to_string),
        auth: parts.auth.clone(),
        hostname: sock_host.map(str::to_string),
        port: sock_port.map(str::to_string),
        pathname: sock_path.to_string(),
    };
    tracing::debug!(socket_url = %url, "merged socket url");
    url
}
