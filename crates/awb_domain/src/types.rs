use serde::{Deserialize, Serialize};

/// A MediaWiki namespace index.
///
/// Negative indices are virtual namespaces (`Special:`, `Media:`), even
/// indices are subject namespaces and odd indices are their talk namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(pub i32);

impl Namespace {
    pub const MEDIA: Self = Self(-2);
    pub const SPECIAL: Self = Self(-1);
    pub const MAIN: Self = Self(0);
    pub const TALK: Self = Self(1);
    pub const USER: Self = Self(2);
    pub const USER_TALK: Self = Self(3);
    pub const PROJECT: Self = Self(4);
    pub const PROJECT_TALK: Self = Self(5);
    pub const FILE: Self = Self(6);
    pub const FILE_TALK: Self = Self(7);
    pub const MEDIAWIKI: Self = Self(8);
    pub const MEDIAWIKI_TALK: Self = Self(9);
    pub const TEMPLATE: Self = Self(10);
    pub const TEMPLATE_TALK: Self = Self(11);
    pub const HELP: Self = Self(12);
    pub const HELP_TALK: Self = Self(13);
    pub const CATEGORY: Self = Self(14);
    pub const CATEGORY_TALK: Self = Self(15);
    pub const PORTAL: Self = Self(100);
    pub const PORTAL_TALK: Self = Self(101);

    pub fn index(self) -> i32 {
        self.0
    }

    /// Odd indices are talk namespaces. Negative indices never are.
    pub fn is_talk(self) -> bool {
        self.0 % 2 == 1
    }
}

impl From<i32> for Namespace {
    fn from(index: i32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
