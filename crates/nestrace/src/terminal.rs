//! Styled stderr summaries for trace runs.

use std::path::Path;

use console::{StyledObject, style};

/// Tag shown in front of a summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

impl Status {
    fn tag(self) -> StyledObject<&'static str> {
        match self {
            Self::Pass => style("pass").green().bold(),
            Self::Warn => style("warn").yellow().bold(),
            Self::Fail => style("fail").red().bold(),
        }
    }
}

/// Print a one-line summary tagged with its status.
pub fn summary(status: Status, message: &str) {
    eprintln!("{} {message}", status.tag());
}

/// Print one side of a divergent pair, with its terminator made visible.
pub fn trace_line(side: &str, line: &str) {
    eprintln!("  {side:<9}{}", style(format!("{line:?}")).dim());
}

/// Print a trace file location under its role in the run.
pub fn trace_file(role: &str, path: &Path) {
    eprintln!("  {role:<9}{}", style(path.display()).dim());
}
