//! Command implementations.

mod compare;
mod normalize;

use nestrace::{MalformedPolicy, TracePaths};
use tracing::error;

use crate::cli::{Cli, Commands, EXIT_FAILURE};
use crate::terminal::{self, Status};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    let paths = cli.paths();
    let policy = MalformedPolicy::from(cli.malformed);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => handle_run(&paths, policy, cli.fail_on_divergence),
        Commands::Normalize => normalize::cmd_normalize(&paths, policy),
        Commands::Compare => compare::cmd_compare(&paths, cli.fail_on_divergence),
    }
}

fn handle_run(paths: &TracePaths, policy: MalformedPolicy, fail_on_divergence: bool) -> i32 {
    match nestrace::run(paths, policy) {
        Ok(report) => {
            normalize::print_summary(&report.normalize, paths);
            compare::print_summary(&report.compare, paths, fail_on_divergence)
        }
        Err(e) => {
            error!(error = %e, "trace comparison failed");
            terminal::summary(Status::Fail, &e.to_string());
            EXIT_FAILURE
        }
    }
}
