use std::{
    env, fs,
    io::{self, IsTerminal, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::super::args::{CommonArgs, ReportCommand, STDIN_PATH};
use super::{CommandResult, CommandSummary, ReportSummary};
use crate::{
    config::{load_config, validate_locale_file},
    core::{Report, ReportBuilder},
};

pub fn report(cmd: ReportCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let (locale_file, config_path) = resolve_locale_file(&args.common)?;

    let raw = read_diff(args.diff.as_deref())?;
    let analysis = ReportBuilder::new(locale_file.as_str()).analyze(&raw);

    if let Some(path) = &args.output {
        write_report(path, &analysis.report)?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Report(ReportSummary {
            analysis,
            locale_file,
            config_path,
            output: args.output,
        }),
    })
}

/// The `--locale-file` flag wins over the config file.
fn resolve_locale_file(common: &CommonArgs) -> Result<(String, Option<PathBuf>)> {
    if let Some(locale_file) = &common.locale_file {
        validate_locale_file(locale_file)?;
        return Ok((locale_file.clone(), None));
    }

    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    Ok((loaded.config.locale_file, loaded.path))
}

/// Read the diff from `path`, or from stdin when no path (or `-`) is given.
///
/// Invalid UTF-8 is replaced rather than rejected.
fn read_diff(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) if path != Path::new(STDIN_PATH) => fs::read(path)
            .with_context(|| format!("Failed to read diff file: {}", path.display()))?,
        _ => {
            let mut stdin = io::stdin().lock();
            if stdin.is_terminal() {
                bail!("No diff to read: pass --diff <FILE> or pipe a unified diff into stdin");
            }
            let mut bytes = Vec::new();
            stdin
                .read_to_end(&mut bytes)
                .context("Failed to read diff from stdin")?;
            bytes
        }
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_report(path: &Path, report: &Report) -> Result<()> {
    let mut content = report.render();
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}
