//! `sockurl resolve` – print the socket URL for a page.

use anyhow::{Context, Result};
use sockurl_core::config::SockUrlConfig;
use sockurl_core::{ScriptTags, SocketUrlResolver, UrlParts};

/// Command-line inputs; unset values fall back to config.
#[derive(Debug, Default)]
pub struct ResolveArgs<'a> {
    pub resource_query: Option<&'a str>,
    pub script_src: Option<&'a str>,
    pub location: Option<&'a str>,
    pub sock_path_default: Option<&'a str>,
}

pub fn run_resolve(cfg: &SockUrlConfig, args: &ResolveArgs<'_>) -> Result<()> {
    let url = resolve_url(cfg, args)?;
    println!("{url}");
    Ok(())
}

fn resolve_url(cfg: &SockUrlConfig, args: &ResolveArgs<'_>) -> Result<String> {
    let location = args
        .location
        .or(cfg.location.as_deref())
        .context("no page location: pass --location or set `location` in config.toml")?;
    let page = UrlParts::parse(location, false)
        .with_context(|| format!("invalid page location {location}"))?;

    let script = ScriptTags::new(
        args.script_src
            .or(cfg.script_src.as_deref())
            .map(str::to_string),
        Vec::new(),
    );

    let mut resolver = SocketUrlResolver::from_config(cfg);
    if let Some(path) = args.sock_path_default {
        resolver = resolver.with_default_sock_path(path);
    }

    let url = resolver
        .resolve(args.resource_query, None, &script, &page)
        .context("resolve socket url")?;
    tracing::info!(socket_url = %url, location, "resolved socket url");
    Ok(url.to_string())
}
