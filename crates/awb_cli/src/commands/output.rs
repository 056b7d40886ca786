use awb_engine::TitleReport;
use console::style;
use std::io::Write;

use crate::OutputFormat;

pub fn write_reports(
    reports: &[TitleReport],
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<(), std::io::Error> {
    match format {
        OutputFormat::Json => {
            for report in reports {
                serde_json::to_writer(&mut *writer, report)?;
                writeln!(writer)?;
            }
        }
        OutputFormat::Plain => {
            for report in reports {
                write_plain(report, writer)?;
            }
        }
        OutputFormat::Csv => {
            writeln!(
                writer,
                "title,namespace,namespace_name,main,editable,talk,important,valid,sanitized,title_name,sort_key"
            )?;
            for r in reports {
                writeln!(
                    writer,
                    "{},{},{},{},{},{},{},{},{},{},{}",
                    csv_field(&r.title),
                    r.namespace,
                    csv_field(&r.namespace_name),
                    r.is_main_space,
                    r.is_editable_space,
                    r.is_talk_page,
                    r.is_important_namespace,
                    r.is_valid_title,
                    csv_field(&r.sanitized),
                    csv_field(&r.title_name),
                    csv_field(&r.sort_key),
                )?;
            }
        }
    }
    Ok(())
}

fn write_plain(r: &TitleReport, writer: &mut dyn Write) -> Result<(), std::io::Error> {
    let namespace = if r.namespace_name.is_empty() {
        "main"
    } else {
        r.namespace_name.as_str()
    };
    writeln!(writer, "{}", style(&r.title).bold())?;
    writeln!(writer, "  namespace: {} ({})", r.namespace, namespace)?;
    writeln!(
        writer,
        "  editable: {}  talk: {}  important: {}  valid: {}",
        yes_no(r.is_editable_space),
        yes_no(r.is_talk_page),
        yes_no(r.is_important_namespace),
        yes_no(r.is_valid_title),
    )?;
    if !r.is_valid_title {
        writeln!(writer, "  sanitized: {}", r.sanitized)?;
    }
    writeln!(writer, "  sort key: {}", style(&r.sort_key).cyan())?;
    Ok(())
}

fn yes_no(value: bool) -> console::StyledObject<&'static str> {
    if value {
        style("yes").green()
    } else {
        style("no").red()
    }
}

/// Quote a field when it holds a comma, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awb_engine::TitleTools;

    fn render(titles: &[&str], format: OutputFormat) -> String {
        let tools = TitleTools::default();
        let reports: Vec<TitleReport> = titles.iter().map(|t| tools.analyze(t)).collect();
        let mut buf = Vec::new();
        write_reports(&reports, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_quotes_sort_key() {
        let out = render(&["David Smith"], OutputFormat::Csv);
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("title,namespace"));
        assert_eq!(
            lines.next().unwrap(),
            "David Smith,0,,true,true,false,true,true,David Smith,David Smith,\"Smith, David\""
        );
    }

    #[test]
    fn test_json_one_object_per_line() {
        let out = render(&["David Smith", "Talk:Foo"], OutputFormat::Json);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["namespace"], 1);
        assert_eq!(second["is_talk_page"], true);
    }

    #[test]
    fn test_plain_contains_sort_key() {
        console::set_colors_enabled(false);
        let out = render(&["Category:David Smith"], OutputFormat::Plain);
        assert!(out.contains("namespace: 14 (Category)"));
        assert!(out.contains("sort key: Smith, David"));
    }

    #[test]
    fn test_csv_field() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
