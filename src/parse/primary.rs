use serde::{Serialize, Serializer};
use std::collections::HashSet;

use super::classify::{AmbiguityResolver, Role};
use super::entry::{split_entries, RawAffiliationRecord};
use super::segment::Segmenter;
use crate::rules::Lexicon;

/// Top-level institution names, deduplicated case-insensitively, in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryInstitutionSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl PrimaryInstitutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when a case-insensitive duplicate is already present.
    pub fn insert(&mut self, name: String) -> bool {
        if !self.seen.insert(name.to_lowercase()) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// `"A; B; C"`
    pub fn join(&self) -> String {
        self.names.join("; ")
    }
}

impl Serialize for PrimaryInstitutionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names.serialize(serializer)
    }
}

/// Coarse pass that keeps only top-level institution names, spelled out
/// rather than abbreviated.
pub struct PrimaryExtractor<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> PrimaryExtractor<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn extract(&self, raw: &str) -> PrimaryInstitutionSet {
        let mut institutions = PrimaryInstitutionSet::new();

        for entry in split_entries(raw) {
            let Some(record) = RawAffiliationRecord::parse(entry) else {
                continue;
            };
            // Siblings come from the same address block, so a university in
            // another country does not demote a college here.
            for block in Segmenter::new(self.lexicon).segment(&record.tokens) {
                let tokens = block.tokens();
                for (idx, token) in tokens.iter().enumerate() {
                    let siblings: Vec<&str> = tokens
                        .iter()
                        .enumerate()
                        .filter(|(other, _)| *other != idx)
                        .map(|(_, s)| s.as_str())
                        .collect();
                    if let Some(name) = self.accept(token, &siblings) {
                        institutions.insert(name);
                    }
                }
            }
        }

        institutions
    }

    /// Cleaned name when `token` reads as a top-level institution.
    pub fn accept(&self, token: &str, siblings: &[&str]) -> Option<String> {
        let token = token.trim();
        if token.chars().count() < self.lexicon.min_summary_chars {
            return None;
        }
        if self.lexicon.has_secondary_prefix(token) {
            return None;
        }

        let is_primary = self.lexicon.summary.matches(token)
            || (self.lexicon.ambiguous.matches(token)
                && AmbiguityResolver::new(self.lexicon).resolve(token, siblings).0
                    == Role::Primary);
        if !is_primary {
            return None;
        }

        let name = self.clean_name(token);
        (!name.is_empty()).then_some(name)
    }

    /// Expands non-English forms to English ones, e.g.
    /// "Università degli Studi di Pavia" -> "University of Pavia".
    pub fn clean_name(&self, name: &str) -> String {
        let mut name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        for substitution in self.lexicon.name_cleaning() {
            name = substitution.apply(&name).into_owned();
        }
        name.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
