//! Category and Collection definitions
//!
//! Categories are what the user picks; collections are where items live.

use std::fmt;
use std::str::FromStr;

use crate::error::CashError;

/// Category label offered when adding an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Personal,
    Business,
}

impl Category {
    /// Picker order
    pub const ALL: [Category; 2] = [Category::Personal, Category::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Business => "Business",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CashError::InvalidArgument(format!("unknown category: {s}")))
    }
}

/// One of the two independent item lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Private,
    Business,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Private, Collection::Business];

    /// Fixed persistence key for this collection
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Private => "PrivateItems",
            Collection::Business => "BusinessItems",
        }
    }

    /// Route a category label to its collection
    ///
    /// Only an exact "Personal" goes to `Private`; any other label,
    /// including unknown ones, goes to `Business`.
    pub fn for_category(category: &str) -> Collection {
        if category == Category::Personal.as_str() {
            Collection::Private
        } else {
            Collection::Business
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Private => f.write_str("private"),
            Collection::Business => f.write_str("business"),
        }
    }
}

impl FromStr for Collection {
    type Err = CashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "private" => Ok(Collection::Private),
            "business" => Ok(Collection::Business),
            other => Err(CashError::InvalidArgument(format!("unknown collection: {other}"))),
        }
    }
}
