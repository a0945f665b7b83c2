use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command, CommonArgs, ReportArgs, ReportCommand};
pub use exit_status::ExitStatus;

use commands::{CommandResult, init::init, report::report as report_command};

/// Main entry point for the transdiff CLI.
///
/// Dispatches to the command handler, prints its result and returns the
/// exit status. Prints help when no command is given.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success);
    };

    let result = run(command)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}

fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Report(cmd) => report_command(cmd),
        Command::Init => init(),
    }
}
