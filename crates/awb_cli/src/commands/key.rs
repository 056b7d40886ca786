use anyhow::Result;
use awb_engine::TitleTools;
use std::io::Write;

pub fn run(tools: &TitleTools, titles: &[String]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for title in titles {
        writeln!(out, "{}", tools.make_human_cat_key(title))?;
    }
    Ok(())
}
