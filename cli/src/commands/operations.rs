use colored::*;
use paddock_core::dispatch::OperationKind;

use crate::pprint;
use crate::terminal::{colors, format, print};

pub fn operations(q_level: u8) {
    for (idx, kind) in OperationKind::ALL.into_iter().enumerate() {
        print::tree_head(idx, kind.name());
        if q_level > 0 {
            continue;
        }

        let mut details: Vec<(String, ColoredString)> = Vec::new();
        let usage = format::usage(kind);
        if !usage.is_empty() {
            details.push(("Args".to_string(), usage.color(colors::ACCENT)));
        }
        details.push(("Alias".to_string(), kind.legacy_name().normal()));
        details.push(("About".to_string(), kind.summary().color(colors::TEXT_DEFAULT)));
        print::as_tree_one_level(details);

        if idx + 1 != OperationKind::ALL.len() {
            pprint!();
        }
    }
}
