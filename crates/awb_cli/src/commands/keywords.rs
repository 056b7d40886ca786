use anyhow::Result;
use awb_engine::TitleTools;

pub fn run(tools: &TitleTools, title: &str, template: &str) -> Result<()> {
    println!("{}", tools.apply_keywords(title, template));
    Ok(())
}
