//! Wiki language codes and the project families they run on.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code: {0}")]
pub struct UnknownLangCode(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown project: {0}")]
pub struct UnknownProject(pub String);

/// How personal names are conventionally written on a wiki, which decides
/// whether and how a category sort key reorders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    /// "Firstname Lastname, Suffix": reorder to "Lastname, Firstname, Suffix".
    GivenFirst,
    /// "Lastname, Firstname Patronymic": a comma is part of the name, not a
    /// suffix separator.
    SurnameFirst,
    /// "Lastname Firstname Patronymic": no reordering at all.
    Patronymic,
}

macro_rules! lang_codes {
    ($($variant:ident => $code:literal),+ $(,)?) => {
        /// Language of the wiki being edited.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum LangCode {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl LangCode {
            pub const ALL: &'static [LangCode] = &[$(LangCode::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(LangCode::$variant => $code,)+
                }
            }
        }

        impl FromStr for LangCode {
            type Err = UnknownLangCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($code => Ok(LangCode::$variant),)+
                    _ => Err(UnknownLangCode(s.to_string())),
                }
            }
        }
    };
}

lang_codes! {
    En => "en",
    Ar => "ar",
    Bg => "bg",
    Ca => "ca",
    Cs => "cs",
    Da => "da",
    De => "de",
    Eo => "eo",
    Es => "es",
    Fi => "fi",
    Fr => "fr",
    He => "he",
    Hu => "hu",
    Is => "is",
    It => "it",
    Ja => "ja",
    Nl => "nl",
    No => "no",
    Pl => "pl",
    Pt => "pt",
    Ro => "ro",
    Ru => "ru",
    Sk => "sk",
    Sl => "sl",
    Sr => "sr",
    Sv => "sv",
    Tr => "tr",
    Uk => "uk",
    Zh => "zh",
}

impl LangCode {
    /// The one place where per-language name conventions are decided.
    pub fn name_order(self) -> NameOrder {
        match self {
            LangCode::Uk => NameOrder::Patronymic,
            LangCode::Ru => NameOrder::SurnameFirst,
            _ => NameOrder::GivenFirst,
        }
    }
}

impl Default for LangCode {
    fn default() -> Self {
        LangCode::En
    }
}

impl std::fmt::Display for LangCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project family a wiki belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Project {
    #[default]
    Wikipedia,
    Wiktionary,
    Wikisource,
    Wikiquote,
    Wikibooks,
    Wikinews,
    Wikiversity,
    Species,
    Commons,
    Meta,
    /// A MediaWiki installation outside Wikimedia.
    Custom,
}

impl Project {
    pub fn is_wikimedia(self) -> bool {
        !matches!(self, Project::Custom)
    }

    /// Wiktionary keeps the first letter of titles as typed.
    pub fn first_letter_case_sensitive(self) -> bool {
        matches!(self, Project::Wiktionary)
    }
}

impl FromStr for Project {
    type Err = UnknownProject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let project = match s.trim().to_ascii_lowercase().as_str() {
            "wikipedia" => Project::Wikipedia,
            "wiktionary" => Project::Wiktionary,
            "wikisource" => Project::Wikisource,
            "wikiquote" => Project::Wikiquote,
            "wikibooks" => Project::Wikibooks,
            "wikinews" => Project::Wikinews,
            "wikiversity" => Project::Wikiversity,
            "species" => Project::Species,
            "commons" => Project::Commons,
            "meta" => Project::Meta,
            "custom" => Project::Custom,
            _ => return Err(UnknownProject(s.to_string())),
        };
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_order_dispatch() {
        assert_eq!(LangCode::Uk.name_order(), NameOrder::Patronymic);
        assert_eq!(LangCode::Ru.name_order(), NameOrder::SurnameFirst);
        assert_eq!(LangCode::En.name_order(), NameOrder::GivenFirst);
        assert_eq!(LangCode::De.name_order(), NameOrder::GivenFirst);
    }

    #[test]
    fn test_lang_code_from_str() {
        assert_eq!("en".parse::<LangCode>().unwrap(), LangCode::En);
        assert_eq!(" RU ".parse::<LangCode>().unwrap(), LangCode::Ru);
        assert_eq!(
            "xx".parse::<LangCode>(),
            Err(UnknownLangCode("xx".to_string()))
        );
    }

    #[test]
    fn test_lang_code_roundtrips_through_display() {
        for &lang in LangCode::ALL {
            assert_eq!(lang.to_string().parse::<LangCode>().unwrap(), lang);
        }
    }

    #[test]
    fn test_lang_code_serde_uses_code() {
        let json = serde_json::to_string(&LangCode::Uk).unwrap();
        assert_eq!(json, "\"uk\"");
        let lang: LangCode = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(lang, LangCode::Fr);
    }

    #[test]
    fn test_default_lang_is_english() {
        assert_eq!(LangCode::default(), LangCode::En);
    }

    #[test]
    fn test_project_is_wikimedia() {
        assert!(Project::Wikipedia.is_wikimedia());
        assert!(Project::Commons.is_wikimedia());
        assert!(!Project::Custom.is_wikimedia());
    }

    #[test]
    fn test_project_first_letter_case() {
        assert!(Project::Wiktionary.first_letter_case_sensitive());
        assert!(!Project::Wikipedia.first_letter_case_sensitive());
    }

    #[test]
    fn test_project_from_str() {
        assert_eq!("Wiktionary".parse::<Project>().unwrap(), Project::Wiktionary);
        assert!("myspace".parse::<Project>().is_err());
    }
}
