mod config;
mod reporter;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::Parser;
use fs_err as fs;
use reporter::ConsoleReporter;
use std::process::ExitCode;
use textfix_engine::reporter::NullReporter;
use textfix_engine::rules::default_rules;
use textfix_engine::{fix_paths, render_patch, FixOptions};
use textfix_types::outcome::RunSummary;
use textfix_types::report::{FixReport, ToolInfo};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "textfix",
    version,
    about = "Repair UTF-8 text files in place: strip BOMs, decode stray HTML entities, normalize line endings to CRLF."
)]
struct Cli {
    /// Files to fix, processed in the order given.
    paths: Vec<Utf8PathBuf>,

    /// Read additional paths from a line-delimited manifest file.
    /// Blank lines and lines starting with '#' are ignored.
    #[arg(long)]
    manifest: Option<Utf8PathBuf>,

    /// Config file (default: textfix.toml in the current directory, if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Transform and report without writing; prints a unified diff of
    /// would-be changes.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Output format for the outcome report.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write the JSON report artifact to this path.
    #[arg(long)]
    report_json: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(summary) if summary.failed > 0 => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<RunSummary> {
    let file_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(Utf8Path::new("."))?,
    };

    let paths = gather_paths(&cli, &file_config)?;
    if paths.is_empty() {
        anyhow::bail!("no paths given; pass files as arguments, via --manifest, or in textfix.toml");
    }
    debug!("fixing {} paths (dry_run={})", paths.len(), cli.dry_run);

    let rules = default_rules();
    let opts = FixOptions {
        dry_run: cli.dry_run,
    };

    let batch = match cli.format {
        OutputFormat::Text => {
            let mut console = ConsoleReporter::new(cli.dry_run);
            fix_paths(&paths, &rules, &opts, &mut console)
        }
        OutputFormat::Json => fix_paths(&paths, &rules, &opts, &mut NullReporter),
    };

    if cli.dry_run && !batch.changes.is_empty() {
        print!("{}", render_patch(&batch.changes));
    }

    let mut report = FixReport::new(tool_info());
    report.outcomes = batch.outcomes;
    report.summary = batch.summary;
    report.run.ended_at = Some(Utc::now());

    if cli.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize report")?
        );
    }

    if let Some(path) = cli.report_json.as_ref().or(file_config.report.json.as_ref()) {
        write_json(path, &report)?;
        info!("wrote report to {}", path);
    }

    Ok(report.summary)
}

/// Assemble the path list: config paths first, then the manifest, then
/// positional arguments, preserving order within each source.
fn gather_paths(cli: &Cli, cfg: &config::TextfixConfig) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut paths: Vec<Utf8PathBuf> = cfg.paths.iter().map(Utf8PathBuf::from).collect();
    if let Some(manifest) = &cli.manifest {
        paths.extend(read_manifest(manifest)?);
    }
    paths.extend(cli.paths.iter().cloned());
    Ok(paths)
}

fn read_manifest(path: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read manifest {}", path))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Utf8PathBuf::from)
        .collect())
}

fn write_json<T: serde::Serialize>(path: &Utf8Path, v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    fs::write(path, s).with_context(|| format!("write {}", path))?;
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "textfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
