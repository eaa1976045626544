//! Leading keywords recognized outside of any clause.

use core::fmt;

/// Keywords that open a query type or a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Query types
    Select,
    Insert,
    Update,

    // Sections
    From,
}

impl Keyword {
    /// Returns the keyword matching `s` exactly.
    ///
    /// Matching is case-sensitive: `select` is not a keyword here.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SELECT" => Some(Self::Select),
            "INSERT" => Some(Self::Insert),
            "UPDATE" => Some(Self::Update),
            "FROM" => Some(Self::From),
            _ => None,
        }
    }

    /// Returns the keyword as written in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::From => "FROM",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
