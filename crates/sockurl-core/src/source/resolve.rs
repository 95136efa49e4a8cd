//! Choosing and parsing the source of truth for the socket address.

use super::{PageLocation, ScriptSource};
use crate::error::SocketUrlError;
use crate::url_parts::UrlParts;

/// Parsed in place of a missing script source.
pub const ROOT_PATH: &str = "/";

/// Resolves the script/query URL and the page location.
///
/// A non-empty `resource_query` (`?<url>&key=value&...`) wins over the
/// script source; only one of them is ever parsed. A non-empty
/// `location_override` is parsed instead of asking `location`.
pub fn resolve_source<S, L>(
    resource_query: Option<&str>,
    location_override: Option<&str>,
    script: &S,
    location: &L,
) -> Result<(UrlParts, UrlParts), SocketUrlError>
where
    S: ScriptSource + ?Sized,
    L: PageLocation + ?Sized,
{
    let parts = match resource_query.filter(|q| !q.is_empty()) {
        Some(query) => {
            let embedded = unpack_resource_query(query);
            tracing::debug!(resource_query = query, url = %embedded, "using resource query");
            UrlParts::parse(&embedded, false)?
        }
        None => {
            let src = script
                .current_script_source()
                .filter(|s| !s.is_empty());
            if src.is_none() {
                tracing::debug!("no script source, falling back to {}", ROOT_PATH);
            }
            let src = src.as_deref().unwrap_or(ROOT_PATH);
            tracing::debug!(script_src = src, "using script source");
            UrlParts::parse(src, true)?
        }
    };

    let loc = match location_override.filter(|l| !l.is_empty()) {
        Some(raw) => {
            tracing::debug!(location = raw, "using location override");
            UrlParts::parse(raw, false)?
        }
        None => location.current_location(),
    };

    Ok((parts, loc))
}

/// `?http://h:1&a=b&c=d` → `http://h:1?a=b&c=d`.
fn unpack_resource_query(query: &str) -> String {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .replacen('&', "?", 1)
}
