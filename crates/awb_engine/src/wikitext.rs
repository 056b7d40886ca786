//! Page-text helpers used alongside title handling: redirect detection,
//! word and link counts.

use regex::Regex;
use std::sync::OnceLock;

fn redirect_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*#REDIRECT\s*:?\s*\[\[\s*:?\s*([^\|\]\[]*?)\s*(?:\|[^\]]*)?\]\]")
            .expect("known-valid regex")
    })
}

/// Whether the page text is a `#REDIRECT [[Target]]` page.
pub fn is_redirect(text: &str) -> bool {
    redirect_re().is_match(text)
}

/// Target title of a redirect page, or `""` for other pages.
pub fn redirect_target(text: &str) -> &str {
    redirect_re()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Number of words in prose, ignoring tables and templates.
pub fn word_count(text: &str) -> usize {
    static TABLE_RE: OnceLock<Regex> = OnceLock::new();
    static TEMPLATE_RE: OnceLock<Regex> = OnceLock::new();
    static WORD_RE: OnceLock<Regex> = OnceLock::new();

    let table = TABLE_RE.get_or_init(|| Regex::new(r"(?s)\{\|.*?\|\}").expect("known-valid regex"));
    let template =
        TEMPLATE_RE.get_or_init(|| Regex::new(r"(?s)\{\{.*?\}\}").expect("known-valid regex"));
    let word = WORD_RE.get_or_init(|| Regex::new(r"\w[\w'’]*").expect("known-valid regex"));

    let without_tables = table.replace_all(text, "");
    let prose = template.replace_all(&without_tables, "");
    word.find_iter(&prose).count()
}

/// Number of `[[wikilinks]]` in the text, category and file links included.
pub fn link_count(text: &str) -> usize {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\[\[[^\[\]]+\]\]").expect("known-valid regex"));
    re.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_redirect() {
        assert!(is_redirect("#REDIRECT [[Main Page]]"));
        assert!(is_redirect("#redirect:[[Main Page]]"));
        assert!(is_redirect("  #Redirect [[Main Page|label]]\n{{R from move}}"));
        assert!(!is_redirect("See #REDIRECT [[Main Page]]"));
        assert!(!is_redirect("Plain article text"));
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(redirect_target("#REDIRECT [[Main Page]]"), "Main Page");
        assert_eq!(redirect_target("#REDIRECT [[ :Category:Foo ]]"), "Category:Foo");
        assert_eq!(redirect_target("#REDIRECT [[Foo#Section|bar]]"), "Foo#Section");
        assert_eq!(redirect_target("Not a redirect"), "");
    }

    #[test]
    fn test_word_count_skips_tables_and_templates() {
        let text = "{{Infobox person\n| name = John\n}}\nJohn Doe is an actor.\n{|\n| cell one\n|}\nHe isn't retired.";
        assert_eq!(word_count(text), 8);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_link_count() {
        let text = "[[Foo]] and [[Bar|bar]] in [[Category:Baz]], not [Qux] or {{Quux}}";
        assert_eq!(link_count(text), 3);
        assert_eq!(link_count("no links"), 0);
    }
}
