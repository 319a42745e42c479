use serde::{Deserialize, Serialize};
use std::fmt;

use super::classify::{ClassifiedBlock, Role};
use crate::hash_institution;
use crate::rules::Lexicon;

/// Canonical address string: primary, secondary, city, country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedInstitution(String);

impl NormalizedInstitution {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split(", ").filter(|c| !c.is_empty())
    }

    pub fn last_component(&self) -> Option<&str> {
        self.components().last()
    }

    pub fn hash(&self) -> String {
        hash_institution(&self.0)
    }
}

impl From<&str> for NormalizedInstitution {
    fn from(text: &str) -> Self {
        Self(normalize_separators(text))
    }
}

impl fmt::Display for NormalizedInstitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapses whitespace inside comma-separated components, drops empty
/// components, and rejoins with `", "`.
pub fn normalize_separators(text: &str) -> String {
    text.split(',')
        .map(|component| component.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rewrites organizational text into its abbreviated form.
pub struct Abbreviator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Abbreviator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// See [`Lexicon::abbreviate`]. Applying it twice changes nothing.
    pub fn abbreviate(&self, text: &str) -> String {
        self.lexicon.abbreviate(text)
    }
}

pub struct Reorderer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Reorderer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Geography is kept out of the abbreviation pass so place names such as
    /// "The Hague" survive; only its final token goes through the country table.
    pub fn reorder(&self, block: &ClassifiedBlock) -> NormalizedInstitution {
        let abbreviator = Abbreviator::new(self.lexicon);
        let mut components: Vec<String> = Vec::with_capacity(block.tokens.len());

        for role in [Role::Primary, Role::Secondary] {
            components.extend(
                block
                    .with_role(role)
                    .map(|token| abbreviator.abbreviate(token))
                    .filter(|c| !c.is_empty()),
            );
        }

        let geography: Vec<&str> = block.with_role(Role::Geography).collect();
        if let Some((country, cities)) = geography.split_last() {
            components.extend(cities.iter().map(|city| normalize_separators(city)));
            components.push(self.lexicon.standardize_country(country));
        }

        NormalizedInstitution(normalize_separators(&components.join(", ")))
    }
}
