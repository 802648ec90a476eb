//! Fix engine for in-place batch text repair.
//!
//! Responsibilities:
//! - Apply ordered literal substitution rules to whole-file text.
//! - Normalize every line terminator to CRLF on write.
//! - Drive the read → transform → write loop with per-file error isolation.
//! - Render a unified diff preview for dry runs.

pub mod error;
pub mod reporter;
pub mod rules;
mod transform;

pub use error::{FixError, FixResult};
pub use transform::{apply_rules, normalize_line_endings, transform};

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use reporter::Reporter;
use rules::SubstitutionRule;
use sha2::{Digest, Sha256};
use textfix_types::outcome::{FixOutcome, FixStatus, RunSummary};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    /// Transform and report without writing anything back.
    pub dry_run: bool,
}

/// One file's captured before/after text, kept for patch rendering.
/// Only files whose content actually changed are captured.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: Utf8PathBuf,
    pub before: String,
    pub after: String,
}

/// Everything one batch run produced.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub outcomes: Vec<FixOutcome>,
    pub summary: RunSummary,
    pub changes: Vec<FileChange>,
}

/// Fix a single file in place.
///
/// Reads the whole file as UTF-8, applies the rules in order, normalizes
/// line terminators, and rewrites the file (truncating prior content). The
/// write happens even when the transform changed nothing, so the mtime of
/// every listed file is touched; the outcome's `changed` flag records
/// whether the bytes differ.
pub fn fix_file(
    path: &Utf8Path,
    rules: &[SubstitutionRule],
    opts: &FixOptions,
) -> FixResult<FixOutcome> {
    fix_one(path, rules, opts).map(|(outcome, _)| outcome)
}

fn fix_one(
    path: &Utf8Path,
    rules: &[SubstitutionRule],
    opts: &FixOptions,
) -> FixResult<(FixOutcome, Option<FileChange>)> {
    let before = fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_owned(),
        source,
    })?;

    let after = transform(&before, rules);
    let changed = after != before;

    if !opts.dry_run {
        fs::write(path, after.as_bytes()).map_err(|source| FixError::Write {
            path: path.to_owned(),
            source,
        })?;
    }

    let outcome = FixOutcome {
        path: path.to_string(),
        status: FixStatus::Fixed,
        message: None,
        changed,
        sha256_before: Some(sha256_hex(before.as_bytes())),
        sha256_after: Some(sha256_hex(after.as_bytes())),
    };

    let change = changed.then(|| FileChange {
        path: path.to_owned(),
        before,
        after,
    });

    Ok((outcome, change))
}

/// Fix every path, in the order given.
///
/// A single file's failure never aborts the batch: it becomes a `failed`
/// outcome and the loop moves on. Each outcome is pushed to the reporter as
/// it is produced, and the summary once the whole list is done.
pub fn fix_paths(
    paths: &[Utf8PathBuf],
    rules: &[SubstitutionRule],
    opts: &FixOptions,
    reporter: &mut dyn Reporter,
) -> BatchOutcome {
    let mut outcomes = Vec::with_capacity(paths.len());
    let mut summary = RunSummary::default();
    let mut changes = Vec::new();

    for path in paths {
        let outcome = match fix_one(path, rules, opts) {
            Ok((outcome, change)) => {
                changes.extend(change);
                outcome
            }
            Err(err) => {
                debug!("fix failed for {}: {}", path, err);
                FixOutcome::failed(path.as_str(), err.to_string())
            }
        };
        summary.record(&outcome);
        reporter.outcome(&outcome);
        outcomes.push(outcome);
    }

    reporter.completed(&summary);

    BatchOutcome {
        outcomes,
        summary,
        changes,
    }
}

/// Render captured changes as a unified diff, one `diff --git` section per
/// file, in batch order.
pub fn render_patch(changes: &[FileChange]) -> String {
    let formatter = diffy::PatchFormatter::new();
    let mut out = String::new();

    for change in changes {
        out.push_str(&format!("diff --git a/{0} b/{0}\n", change.path));
        out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", change.path));

        let patch = diffy::create_patch(&change.before, &change.after);
        out.push_str(&formatter.fmt_patch(&patch).to_string());
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
