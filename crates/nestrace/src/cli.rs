//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use nestrace::{
    DEFAULT_ACTUAL_PATH, DEFAULT_DESIRED_PATH, DEFAULT_NORMALIZED_PATH, MalformedPolicy,
    TracePaths,
};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "nestrace")]
#[command(about = "Compare an emulator CPU trace against a nestest-style golden log")]
#[command(version)]
pub struct Cli {
    /// Trace written by the emulator under test
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_ACTUAL_PATH)]
    pub actual: PathBuf,

    /// Reference (golden) trace
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_DESIRED_PATH)]
    pub desired: PathBuf,

    /// Normalized reference trace (overwritten by `run` and `normalize`)
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_NORMALIZED_PATH)]
    pub normalized: PathBuf,

    /// What to do with reference lines missing the `A:` or `SP` markers
    #[arg(long, global = true, value_enum, default_value = "fail")]
    pub malformed: MalformedArg,

    /// Exit with a failure status when the traces diverge
    #[arg(long, global = true)]
    pub fail_on_divergence: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress logging (keep the divergence report and errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// File locations selected on the command line.
    pub fn paths(&self) -> TracePaths {
        TracePaths::default()
            .with_actual(&self.actual)
            .with_desired(&self.desired)
            .with_normalized(&self.normalized)
    }

    /// Default `tracing` directive for the selected verbosity.
    ///
    /// `--silent` stops at `warn`, the level the divergence report is logged at.
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "nestrace=debug"
        } else if self.silent {
            "nestrace=warn"
        } else {
            "nestrace=info"
        }
    }
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Normalize the reference trace, then compare (default)
    Run,
    /// Only normalize the reference trace
    Normalize,
    /// Only compare against an already-normalized reference trace
    Compare,
}

/// Malformed reference line handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MalformedArg {
    /// Abort at the first malformed line
    Fail,
    /// Drop malformed lines
    Skip,
    /// Keep whatever the legacy fixed-offset slicing yields
    Passthrough,
}

impl From<MalformedArg> for MalformedPolicy {
    fn from(arg: MalformedArg) -> Self {
        match arg {
            MalformedArg::Fail => Self::Fail,
            MalformedArg::Skip => Self::Skip,
            MalformedArg::Passthrough => Self::Passthrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_legacy_file_names() {
        let cli = Cli::try_parse_from(["nestrace"]).unwrap();

        assert_eq!(cli.command, None);
        assert_eq!(cli.paths(), TracePaths::default());
        assert_eq!(MalformedPolicy::from(cli.malformed), MalformedPolicy::Fail);
        assert!(!cli.fail_on_divergence);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "nestrace",
            "compare",
            "--actual",
            "trace.log",
            "--malformed",
            "passthrough",
            "--fail-on-divergence",
        ])
        .unwrap();

        assert_eq!(cli.command, Some(Commands::Compare));
        assert_eq!(cli.paths().actual, PathBuf::from("trace.log"));
        assert_eq!(
            MalformedPolicy::from(cli.malformed),
            MalformedPolicy::Passthrough
        );
        assert!(cli.fail_on_divergence);
    }

    #[test]
    fn test_log_directive_keeps_report_when_silent() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().log_directive();

        assert_eq!(parse(&["nestrace"]), "nestrace=info");
        assert_eq!(parse(&["nestrace", "-v"]), "nestrace=debug");
        assert_eq!(parse(&["nestrace", "compare", "--silent"]), "nestrace=warn");
    }

    #[test]
    fn test_verbose_conflicts_with_silent() {
        assert!(Cli::try_parse_from(["nestrace", "-v", "-s"]).is_err());
    }
}
