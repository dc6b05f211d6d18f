//! Card identifiers and card-set aliases.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a single card, in slug form (e.g. `mini-pekka`).
///
/// Card identifiers are produced by an external loader that normalizes
/// third-party card names into catalog slugs; the core treats them as
/// opaque, ordered, hashable keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardId(String);

impl CardId {
    /// Creates a card identifier from a slug.
    pub fn new(slug: impl Into<String>) -> Self {
        CardId(slug.into())
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(slug: &str) -> Self {
        CardId::new(slug)
    }
}

impl From<String> for CardId {
    fn from(slug: String) -> Self {
        CardId::new(slug)
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An unordered set of card identifiers.
///
/// A `BTreeSet` keeps iteration deterministic, which matters for the
/// reproducibility guarantees of the recommender.
pub type CardSet = BTreeSet<CardId>;
