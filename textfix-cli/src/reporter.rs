//! Console reporter: one line per outcome, then a completion line.

use textfix_engine::reporter::Reporter;
use textfix_types::outcome::{FixOutcome, FixStatus, RunSummary};

pub struct ConsoleReporter {
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    fn suffix(&self) -> &'static str {
        if self.dry_run {
            " (dry-run)"
        } else {
            ""
        }
    }
}

impl Reporter for ConsoleReporter {
    fn outcome(&mut self, outcome: &FixOutcome) {
        match outcome.status {
            FixStatus::Fixed => println!("fixed: {}{}", outcome.path, self.suffix()),
            FixStatus::Failed => println!(
                "error fixing {}: {}",
                outcome.path,
                outcome.message.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    fn completed(&mut self, summary: &RunSummary) {
        println!(
            "all {} files processed ({} fixed, {} failed, {} changed){}",
            summary.total,
            summary.fixed,
            summary.failed,
            summary.files_changed,
            self.suffix()
        );
    }
}
