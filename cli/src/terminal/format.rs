use colored::*;
use paddock_common::RacingError;
use paddock_core::dispatch::{OperationKind, Outcome};

use crate::terminal::colors;

pub fn outcome_to_value(outcome: &Outcome) -> ColoredString {
    match outcome {
        Outcome::Done => "ok".color(colors::SUCCESS).bold(),
        Outcome::Amount(_) => outcome.to_string().color(colors::AMOUNT),
        Outcome::Id(_) | Outcome::Ids(_) => outcome.to_string().color(colors::ACCENT),
        Outcome::Text(_) | Outcome::Texts(_) => outcome.to_string().color(colors::TEXT_DEFAULT),
    }
}

pub fn error_to_value(err: &RacingError) -> ColoredString {
    format!("{} ({})", err.kind(), err).color(colors::FAILURE)
}

/// `<id> <name> ...` usage string for an operation.
pub fn usage(kind: OperationKind) -> String {
    kind.arguments()
        .iter()
        .map(|arg| format!("<{arg}>"))
        .collect::<Vec<String>>()
        .join(" ")
}
