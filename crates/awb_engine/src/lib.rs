//! Title classification, sanitizing and category sort-key derivation.
//!
//! Every function here is pure: results depend only on the title and the
//! site's namespace table and language, so all types are freely shareable
//! across threads.

pub mod category;
pub mod diacritics;
pub mod keywords;
pub mod namespace_util;
pub mod title_sanitizer;
pub mod title_tools;
pub mod title_util;
pub mod wikitext;

pub use category::{CategoryKeyBuilder, is_roman_number};
pub use diacritics::remove_diacritics;
pub use namespace_util::NamespaceClassifier;
pub use title_sanitizer::{is_valid_title, remove_invalid_chars};
pub use title_tools::{TitleReport, TitleTools};
