//! Tests for parse, completions, man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_parse() {
    match parse(&["sockurl", "parse", "//cdn.test/app.js", "--slashes-denote-host"]) {
        CliCommand::Parse {
            url,
            slashes_denote_host,
            json,
        } => {
            assert_eq!(url, "//cdn.test/app.js");
            assert!(slashes_denote_host);
            assert!(!json);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_json() {
    match parse(&["sockurl", "parse", "/", "--json"]) {
        CliCommand::Parse { json, .. } => assert!(json),
        _ => panic!("expected Parse with --json"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["sockurl", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["sockurl", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["sockurl", "connect"]).is_err());
}
