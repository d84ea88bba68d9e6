use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use colored::*;
use tracing::info_span;

use crate::pprint;
use crate::terminal::{colors, format, print};
use paddock_common::{config::Config, RacingError};
use paddock_core::dispatch::{self, OperationKind, Outcome};
use paddock_core::RacingApplication;

/// Tally of one script execution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub succeeded: usize,
    pub failed: usize,
}

pub fn run(path: &Path, cfg: &Config) -> anyhow::Result<()> {
    let source = read_script(path)?;
    let span = info_span!("script", path = %path.display());
    let _guard = span.enter();

    let mut app = RacingApplication::in_memory();
    let start_time = Instant::now();
    let report = execute_script(&source, &mut app, cfg, |line_no, kind, result| match result {
        Ok(outcome) => print::result_line(line_no, kind, format::outcome_to_value(outcome), cfg.quiet),
        Err(err) => print::failure_line(line_no, kind, format::error_to_value(err)),
    })
    .with_context(|| format!("in script {}", path.display()))?;

    print_summary(report, &app, start_time.elapsed(), cfg);
    Ok(())
}

/// Runs every command of `source` against `app`, handing each result to `on_result`.
///
/// Parse errors abort the run. Business failures abort it only with `fail_fast`.
pub fn execute_script<F>(
    source: &str,
    app: &mut RacingApplication,
    cfg: &Config,
    mut on_result: F,
) -> anyhow::Result<Report>
where
    F: FnMut(usize, OperationKind, &Result<Outcome, RacingError>),
{
    let mut report = Report::default();

    for (line_no, parsed) in dispatch::parse_script(source) {
        let operation = parsed.with_context(|| format!("line {line_no}"))?;
        let kind = operation.kind();
        let result = operation.execute(app);
        on_result(line_no, kind, &result);

        match result {
            Ok(_) => report.succeeded += 1,
            Err(err) => {
                report.failed += 1;
                if cfg.fail_fast {
                    bail!("line {line_no}: {kind} failed: {err}");
                }
            }
        }
    }

    Ok(report)
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read script from stdin")?;
        return Ok(source);
    }

    fs::read_to_string(path).with_context(|| format!("failed to read script {}", path.display()))
}

fn print_summary(report: Report, app: &RacingApplication, total_time: Duration, cfg: &Config) {
    let total: ColoredString = format!("{} operations", report.succeeded + report.failed).bold().green();
    let failed: ColoredString = match report.failed {
        0 => "no failures".normal(),
        n => format!("{n} failed").bold().red(),
    };
    let paddock: ColoredString = format!("{} pilots, {} cars", app.pilot_count(), app.car_count()).bold().yellow();
    let elapsed: ColoredString = format!("{:.2}ms", total_time.as_secs_f64() * 1000.0).dimmed();
    let output: &ColoredString = &format!("{total} ({failed}) · {paddock} · {elapsed}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        1 => {
            pprint!();
            pprint!(&output.to_string());
        }
        _ => {}
    }
}
