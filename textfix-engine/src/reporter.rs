//! Port trait abstracting outcome reporting away from the fix loop.

use textfix_types::outcome::{FixOutcome, RunSummary};

/// Sink for per-file outcomes and the end-of-batch summary.
pub trait Reporter {
    fn outcome(&mut self, outcome: &FixOutcome);
    fn completed(&mut self, summary: &RunSummary);
}

/// Discards everything. For callers that only want the returned records.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn outcome(&mut self, _outcome: &FixOutcome) {}
    fn completed(&mut self, _summary: &RunSummary) {}
}
