//! Parsing of absolute, protocol-relative and path-only inputs.

use std::borrow::Cow;
use std::collections::BTreeMap;

use url::{form_urlencoded, Host, ParseError, Url};

use super::UrlParts;
use crate::error::SocketUrlError;

/// Scheme lent to `//host/path` references so the `url` crate can parse them.
const BORROWED_SCHEME: &str = "http:";

impl UrlParts {
    /// Decomposes `input` into its parts.
    ///
    /// Absolute URLs go through the `url` crate. Scheme-less input is
    /// path-only unless `slashes_denote_host` is set and it starts with
    /// `//`, in which case the leading segment is the authority and the
    /// protocol stays absent.
    ///
    /// # Examples
    ///
    /// - `parse("http://0.0.0.0:8096?sockPort=8097", false)` → hostname `0.0.0.0`, port `8096`
    /// - `parse("/", true)` → pathname `/`, everything else absent
    pub fn parse(input: &str, slashes_denote_host: bool) -> Result<Self, SocketUrlError> {
        match Url::parse(input) {
            Ok(url) => Ok(from_url(&url, input)),
            Err(ParseError::RelativeUrlWithoutBase) => {
                if slashes_denote_host && input.starts_with("//") {
                    let absolute = format!("{BORROWED_SCHEME}{input}");
                    let url =
                        Url::parse(&absolute).map_err(|e| SocketUrlError::malformed(input, e))?;
                    let mut parts = from_url(&url, &absolute);
                    parts.protocol = None;
                    Ok(parts)
                } else {
                    Ok(path_only(input))
                }
            }
            Err(e) => Err(SocketUrlError::malformed(input, e)),
        }
    }
}

fn from_url(url: &Url, raw: &str) -> UrlParts {
    let hostname = match url.host() {
        Some(Host::Domain(d)) if !d.is_empty() => Some(d.to_string()),
        // Shorthand forms (`0`, `127.1`) stay as written so `0.0.0.0` and
        // `127.0.0.1` only match when spelled out.
        Some(Host::Ipv4(addr)) => Some(written_host(raw).unwrap_or_else(|| addr.to_string())),
        Some(Host::Ipv6(addr)) => Some(addr.to_string()),
        _ => None,
    };

    // The url crate drops a port equal to the scheme default; keep it when written.
    let port = match url.port() {
        Some(p) => Some(p),
        None if has_explicit_port(raw) => url.port_or_known_default(),
        None => None,
    };

    let auth = match (url.username(), url.password()) {
        ("", None) => None,
        (user, None) => Some(user.to_string()),
        (user, Some(pass)) => Some(format!("{user}:{pass}")),
    };

    UrlParts {
        protocol: Some(format!("{}:", url.scheme())),
        slashes: url.has_authority(),
        auth,
        hostname,
        port: port.map(|p| p.to_string()),
        pathname: Some(url.path()).filter(|p| !p.is_empty()).map(str::to_string),
        query: collect_query(url.query_pairs()),
    }
}

fn path_only(input: &str) -> UrlParts {
    let without_fragment = input.split('#').next().unwrap_or_default();
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    };

    UrlParts {
        pathname: Some(path).filter(|p| !p.is_empty()).map(str::to_string),
        query: query
            .map(|q| collect_query(form_urlencoded::parse(q.as_bytes())))
            .unwrap_or_default(),
        ..UrlParts::default()
    }
}

fn collect_query<'a>(
    pairs: impl Iterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
) -> BTreeMap<String, String> {
    let mut query = BTreeMap::new();
    for (key, value) in pairs {
        query
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    query
}

/// Host and port of `raw`'s authority, as written.
fn written_host_port(raw: &str) -> Option<&str> {
    let (_, rest) = raw.trim().split_once("//")?;
    let authority = rest
        .split(|c: char| matches!(c, '/' | '?' | '#' | '\\'))
        .next()
        .unwrap_or_default();
    Some(authority.rsplit('@').next().unwrap_or(authority))
}

/// Lowercased non-bracketed host of `raw`'s authority.
fn written_host(raw: &str) -> Option<String> {
    let host_port = written_host_port(raw)?;
    if host_port.starts_with('[') {
        return None;
    }
    let host = host_port.split(':').next().unwrap_or_default();
    Some(host)
        .filter(|h| !h.is_empty())
        .map(str::to_ascii_lowercase)
}

/// Whether the authority of `raw` spells out a numeric port.
fn has_explicit_port(raw: &str) -> bool {
    let Some(host_port) = written_host_port(raw) else {
        return false;
    };
    let after_host = match host_port.rfind(']') {
        Some(i) => &host_port[i + 1..],
        None => host_port,
    };
    match after_host.rfind(':') {
        Some(i) => {
            let digits = &after_host[i + 1..];
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
