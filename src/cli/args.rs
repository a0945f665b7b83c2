//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `report`: List translation keys whose value changed in a unified diff
//! - `init`: Initialize transdiff configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

/// Value of `--diff` that reads the diff from stdin.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Report(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locale file name to report on (overrides config file)
    #[arg(long, env = "TRANSDIFF_LOCALE_FILE", value_name = "NAME")]
    pub locale_file: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Unified diff to read (default: stdin, also with "-")
    #[arg(short, long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub args: ReportArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List translation keys whose value changed in a unified diff of locale files
    Report(ReportCommand),
    /// Initialize a new .transdiffrc.json configuration file
    Init,
}
