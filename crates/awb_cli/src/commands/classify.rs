use anyhow::Result;
use awb_engine::{TitleReport, TitleTools};

use super::output::write_reports;
use crate::OutputFormat;

pub fn run(tools: &TitleTools, titles: &[String], format: OutputFormat) -> Result<()> {
    let reports: Vec<TitleReport> = titles.iter().map(|t| tools.analyze(t)).collect();
    let mut out = std::io::stdout().lock();
    write_reports(&reports, format, &mut out)?;
    Ok(())
}
