//! CLI tool to inject environment variables into built front-end assets.

use std::process::ExitCode;
use std::time::Instant;

use reactenv::{Config, ConsoleReporter, Outcome, ProcessEnv, Reporter, logging};

/// Exit code for a run that found nothing to replace under `--strict`.
const EXIT_NOTHING_TO_DO: u8 = 3;

fn main() -> ExitCode {
    let started = Instant::now();

    let config = match Config::from_cli() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    logging::init(config.verbose);

    let mut reporter = ConsoleReporter::new(config.quiet);

    match reactenv::run(&config, &ProcessEnv, &mut reporter) {
        Ok(Outcome::Injected(_) | Outcome::DryRun { .. }) => {
            reporter.success(&format!("Done in {:.2?}", started.elapsed()));
            ExitCode::SUCCESS
        }
        Ok(Outcome::NothingToDo) => {
            if config.strict {
                reporter.error("Nothing to do, failing because of '--strict'");
                ExitCode::from(EXIT_NOTHING_TO_DO)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            reporter.error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
