use std::io::{self, BufRead, Write};

use anyhow::Context;
use colored::*;
use tracing::debug;

use crate::commands::operations;
use crate::terminal::{colors, format, print};
use paddock_common::config::Config;
use paddock_core::dispatch::{self, ParseError};
use paddock_core::RacingApplication;

const PROMPT: &str = "paddock> ";

pub fn shell(cfg: &Config) -> anyhow::Result<()> {
    let mut app = RacingApplication::in_memory();
    let stdin = io::stdin();
    let mut line_no: usize = 0;

    if cfg.quiet == 0 {
        print::print_status("type an operation, 'help' for the list, 'exit' to leave");
    }

    loop {
        prompt()?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            break;
        }
        line_no += 1;

        match line.trim() {
            "exit" | "quit" => break,
            "help" => {
                operations::operations(1);
                continue;
            }
            _ => {}
        }

        match dispatch::parse_line(&line) {
            Ok(Some(operation)) => {
                let kind = operation.kind();
                match operation.execute(&mut app) {
                    Ok(outcome) => {
                        print::result_line(line_no, kind, format::outcome_to_value(&outcome), cfg.quiet)
                    }
                    Err(err) => print::failure_line(line_no, kind, format::error_to_value(&err)),
                }
            }
            Ok(None) => {}
            Err(err) => report_parse_error(&err),
        }
    }

    debug!(pilots = app.pilot_count(), cars = app.car_count(), "shell closed");
    Ok(())
}

fn prompt() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", PROMPT.color(colors::PRIMARY)).context("failed to write prompt")?;
    stdout.flush().context("failed to flush prompt")
}

fn report_parse_error(err: &ParseError) {
    print::print_status(err.to_string().color(colors::FAILURE).to_string());
}
