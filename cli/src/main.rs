mod commands;
mod terminal;

use commands::{CommandLine, Commands, operations, run, shell};
use paddock_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        fail_fast: matches!(commands.command, Commands::Run { fail_fast: true, .. }),
        verbosity: commands.verbose,
    };

    logging::init_logging(cfg.verbosity);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Run { script, .. } => {
            print::header("running script", cfg.quiet);
            run::run(&script, &cfg)
        }
        Commands::Shell => {
            print::header("paddock shell", cfg.quiet);
            shell::shell(&cfg)?;
            if cfg.quiet == 0 {
                print::end_of_program();
            }
            Ok(())
        }
        Commands::Operations => {
            print::header("operations", cfg.quiet);
            operations::operations(cfg.quiet);
            Ok(())
        }
    }
}
