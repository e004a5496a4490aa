//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Labscan - missing lab-report scanner.
#[derive(Debug, Parser)]
#[command(name = "labscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to scan (overrides current directory)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan for missing report files (default if no command specified)
    Scan(ScanArgs),

    /// List the expected report filenames
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Restrict to a single lab number
    #[arg(long, value_name = "LAB")]
    pub lab: Option<u8>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_means_default_scan() {
        let cli = Cli::try_parse_from(["labscan"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.dir.is_none());
    }

    #[test]
    fn dir_flag_is_global() {
        let cli = Cli::try_parse_from(["labscan", "scan", "--dir", "/submissions"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/submissions")));
    }

    #[test]
    fn list_accepts_lab_filter() {
        let cli = Cli::try_parse_from(["labscan", "list", "--lab", "3"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => assert_eq!(args.lab, Some(3)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn scan_accepts_json_flag() {
        let cli = Cli::try_parse_from(["labscan", "scan", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Scan(args)) => assert!(args.json),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["labscan", "frobnicate"]).is_err());
    }
}
