//! `sockurl parse <url>` – show the decomposition of a URL-like string.

use anyhow::Result;
use sockurl_core::UrlParts;

pub fn run_parse(url: &str, slashes_denote_host: bool, json: bool) -> Result<()> {
    let parts = UrlParts::parse(url, slashes_denote_host)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
    } else {
        print!("{}", render(&parts));
    }
    Ok(())
}

fn render(parts: &UrlParts) -> String {
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    let mut out = String::new();
    out.push_str(&format!("{:<10} {}\n", "protocol", field(&parts.protocol)));
    out.push_str(&format!("{:<10} {}\n", "slashes", parts.slashes));
    out.push_str(&format!("{:<10} {}\n", "auth", field(&parts.auth)));
    out.push_str(&format!("{:<10} {}\n", "hostname", field(&parts.hostname)));
    out.push_str(&format!("{:<10} {}\n", "port", field(&parts.port)));
    out.push_str(&format!("{:<10} {}\n", "pathname", field(&parts.pathname)));
    for (key, value) in &parts.query {
        out.push_str(&format!("{:<10} {}={}\n", "query", key, value));
    }
    out
}
