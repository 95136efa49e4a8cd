//! CLI for resolving live-update socket URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sockurl_core::config;

use commands::{run_completions, run_man, run_parse, run_resolve, ResolveArgs};

/// Top-level CLI for sockurl.
#[derive(Debug, Parser)]
#[command(name = "sockurl")]
#[command(about = "Resolve the socket URL a live-update client connects back to", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the socket URL from a resource query or script source and a page location.
    Resolve {
        /// Resource query of the loading script, e.g. `?http://0.0.0.0:8096&sockPort=8097`.
        #[arg(long, value_name = "QUERY")]
        resource_query: Option<String>,
        /// URL the client script was loaded from (defaults to `script_src` in config).
        #[arg(long, value_name = "URL")]
        script_src: Option<String>,
        /// Current page location (defaults to `location` in config).
        #[arg(long, value_name = "URL")]
        location: Option<String>,
        /// Socket path used when the query has no `sockPath` (overrides config).
        #[arg(long, value_name = "PATH")]
        sock_path_default: Option<String>,
    },

    /// Show how a URL-like string decomposes.
    Parse {
        /// URL, protocol-relative URL or path.
        url: String,
        /// Treat a leading `//` as the start of a host.
        #[arg(long)]
        slashes_denote_host: bool,
        /// Print JSON instead of one field per line.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve {
                resource_query,
                script_src,
                location,
                sock_path_default,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_resolve(
                    &cfg,
                    &ResolveArgs {
                        resource_query: resource_query.as_deref(),
                        script_src: script_src.as_deref(),
                        location: location.as_deref(),
                        sock_path_default: sock_path_default.as_deref(),
                    },
                )?;
            }
            CliCommand::Parse {
                url,
                slashes_denote_host,
                json,
            } => run_parse(&url, slashes_denote_host, json)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
