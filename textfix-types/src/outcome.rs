use serde::{Deserialize, Serialize};

/// Terminal status of one file in a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixStatus {
    Fixed,
    Failed,
}

/// Per-file outcome record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixOutcome {
    pub path: String,
    pub status: FixStatus,

    /// Failure description when `status` is `failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// True when the rewritten content differs from what was on disk.
    #[serde(default)]
    pub changed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256_after: Option<String>,
}

impl FixOutcome {
    pub fn fixed(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: FixStatus::Fixed,
            message: None,
            changed: false,
            sha256_before: None,
            sha256_after: None,
        }
    }

    pub fn failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: FixStatus::Failed,
            message: Some(message.into()),
            changed: false,
            sha256_before: None,
            sha256_after: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == FixStatus::Failed
    }
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: u64,
    pub fixed: u64,
    pub failed: u64,
    pub files_changed: u64,
}

impl RunSummary {
    /// Fold one outcome into the counters.
    pub fn record(&mut self, outcome: &FixOutcome) {
        self.total += 1;
        match outcome.status {
            FixStatus::Fixed => self.fixed += 1,
            FixStatus::Failed => self.failed += 1,
        }
        if outcome.changed {
            self.files_changed += 1;
        }
    }
}
