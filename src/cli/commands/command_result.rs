use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::Analysis;

#[derive(Debug)]
pub enum CommandSummary {
    Report(ReportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ReportSummary {
    pub analysis: Analysis,
    pub locale_file: String,
    /// Config file the locale file came from, if any.
    pub config_path: Option<PathBuf>,
    /// File the report was written to, `None` for stdout.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running transdiff commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Report(_) => ExitStatus::Success,
            CommandSummary::Init(summary) if summary.created => ExitStatus::Success,
            CommandSummary::Init(_) => ExitStatus::Failure,
        }
    }
}
