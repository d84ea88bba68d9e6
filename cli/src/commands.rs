pub mod operations;
pub mod run;
pub mod shell;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "paddock")]
#[command(about = "Pilots, cars and the money between them.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q: results only, -qq: failures only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show application logs (-v warnings, -vv mutations, -vvv queries)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a script of operations, one per line
    #[command(alias = "r")]
    Run {
        /// Script to execute, or '-' to read it from stdin
        script: PathBuf,
        /// Stop at the first operation that fails
        #[arg(long)]
        fail_fast: bool,
    },
    /// Type operations interactively
    #[command(alias = "s")]
    Shell,
    /// List every operation with its arguments
    #[command(aliases = ["o", "ops"])]
    Operations,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
