use anyhow::{Context, Result};
use awb_engine::{TitleReport, TitleTools};
use awb_telemetry::TelemetryEvent;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use super::output::write_reports;
use crate::OutputFormat;

pub fn run(
    tools: &TitleTools,
    site_id: &str,
    input: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let content = std::fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let titles = read_titles(&content);

    TelemetryEvent::batch_started(input.display().to_string(), site_id, tools.lang()).emit();
    let started = Instant::now();

    let pb = ProgressBar::new(titles.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );

    let mut reports: Vec<TitleReport> = Vec::with_capacity(titles.len());
    for title in &titles {
        pb.set_message(title.to_string());
        let report = tools.analyze(title);
        TelemetryEvent::title_analyzed(&report.title, report.namespace, &report.sort_key).emit();
        reports.push(report);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let invalid = reports.iter().filter(|r| !r.is_valid_title).count();
    let non_editable = reports.iter().filter(|r| !r.is_editable_space).count();
    TelemetryEvent::batch_completed(
        reports.len(),
        invalid,
        non_editable,
        started.elapsed().as_secs_f64(),
    )
    .emit();

    match &output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_reports(&reports, format, &mut file).context("Failed to write results")?;
            file.flush()?;
        }
        None => {
            let mut out = std::io::stdout().lock();
            write_reports(&reports, format, &mut out).context("Failed to write results")?;
        }
    }

    eprintln!(
        "{} {} titles ({} invalid, {} not editable)",
        style("✓").green().bold(),
        reports.len(),
        style(invalid).yellow(),
        style(non_editable).yellow()
    );
    if let Some(path) = output {
        eprintln!("Results written to {}", path.display());
    }

    Ok(())
}

/// One title per line; blank lines are skipped and surrounding whitespace
/// dropped.
fn read_titles(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
