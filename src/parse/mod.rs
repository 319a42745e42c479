//! Affiliation parsing: segment each author group at country names, label
//! tokens as primary, secondary or geography, rebuild a canonical
//! abbreviated address, then group co-affiliated authors.

mod classify;
mod entry;
mod group;
mod primary;
mod reorder;
mod segment;

pub use classify::{
    AmbiguityResolver, Classification, ClassifiedBlock, ClassifiedToken, Classifier, Role,
    FALLBACK_PRIMARY, TRAILING_GEOGRAPHY,
};
pub use entry::{split_entries, RawAffiliationRecord};
pub use group::{group_by_institution, AuthorInstitutionPair, FormattedAddressBlock};
pub use primary::{PrimaryExtractor, PrimaryInstitutionSet};
pub use reorder::{normalize_separators, Abbreviator, NormalizedInstitution, Reorderer};
pub use segment::{AddressBlock, Segmenter};

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::rules::{Lexicon, Rules};

/// Both output fields for one record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedAffiliations {
    pub addresses: Vec<FormattedAddressBlock>,
    pub primary_institutions: PrimaryInstitutionSet,
    /// Entries dropped for lacking an author prefix or address.
    pub skipped_entries: usize,
}

impl ParsedAffiliations {
    /// Address lines joined by newlines.
    pub fn address_field(&self) -> String {
        self.addresses
            .iter()
            .map(FormattedAddressBlock::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn primary_field(&self) -> String {
        self.primary_institutions.join()
    }
}

/// Owns the compiled lexicon and hands it to each component by reference.
/// Holds no mutable state, so one parser can serve many threads.
#[derive(Debug, Clone)]
pub struct AffiliationParser {
    lexicon: Lexicon,
}

impl AffiliationParser {
    pub fn new(rules: &Rules) -> Result<Self> {
        Ok(Self::from_lexicon(Lexicon::compile(rules)?))
    }

    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(&self.lexicon)
    }

    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.lexicon)
    }

    pub fn reorderer(&self) -> Reorderer<'_> {
        Reorderer::new(&self.lexicon)
    }

    pub fn abbreviator(&self) -> Abbreviator<'_> {
        Abbreviator::new(&self.lexicon)
    }

    pub fn extractor(&self) -> PrimaryExtractor<'_> {
        PrimaryExtractor::new(&self.lexicon)
    }

    pub fn normalize_block(&self, block: &AddressBlock) -> NormalizedInstitution {
        self.reorderer().reorder(&self.classifier().classify(block))
    }

    /// Classifies and reorders tokens already known to form one block.
    pub fn normalize_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> NormalizedInstitution {
        let tokens = tokens
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        self.normalize_block(&AddressBlock::new(tokens))
    }

    /// One pair per author per address block, plus the number of entries
    /// that had to be skipped.
    pub fn pairs(&self, raw: &str) -> (Vec<AuthorInstitutionPair>, usize) {
        let segmenter = self.segmenter();
        let mut pairs = Vec::new();
        let mut skipped = 0;

        for entry in split_entries(raw) {
            let Some(record) = RawAffiliationRecord::parse(entry) else {
                debug!("Skipping entry without author prefix or address: {:?}", entry);
                skipped += 1;
                continue;
            };

            for block in segmenter.segment(&record.tokens) {
                let institution = self.normalize_block(&block);
                if institution.is_empty() {
                    debug!("Block {:?} normalized to nothing", block.tokens());
                    continue;
                }
                pairs.push(AuthorInstitutionPair {
                    author: record.author.clone(),
                    institution,
                });
            }
        }

        (pairs, skipped)
    }

    pub fn parse(&self, raw: &str) -> ParsedAffiliations {
        let (pairs, skipped_entries) = self.pairs(raw);
        ParsedAffiliations {
            addresses: group_by_institution(pairs),
            primary_institutions: self.extractor().extract(raw),
            skipped_entries,
        }
    }
}
