use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

pub mod inspect;
pub mod normalize;
pub mod parse;
pub mod rules;
pub mod wos;

pub use parse::{AffiliationParser, NormalizedInstitution, ParsedAffiliations};
pub use rules::{load_rules, Lexicon, Rules};

pub fn hash_institution(institution: &str) -> String {
    format!("{:016x}", xxh3_64(institution.as_bytes()))
}

/// One input record: its identifier and the raw "Authors with affiliations" value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: String,
    pub affiliations: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressLine {
    pub authors: Vec<String>,
    pub institution: NormalizedInstitution,
    pub institution_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub id: String,
    pub addresses: Vec<AddressLine>,
    pub primary_institutions: Vec<String>,
    pub address_field: String,
    pub primary_institutions_field: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub skipped_entries: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl NormalizedRecord {
    pub fn from_parsed(id: impl Into<String>, parsed: &ParsedAffiliations) -> Self {
        Self {
            id: id.into(),
            addresses: parsed
                .addresses
                .iter()
                .map(|block| AddressLine {
                    authors: block.authors.clone(),
                    institution_hash: block.institution.hash(),
                    institution: block.institution.clone(),
                })
                .collect(),
            primary_institutions: parsed.primary_institutions.as_slice().to_vec(),
            address_field: parsed.address_field(),
            primary_institutions_field: parsed.primary_field(),
            skipped_entries: parsed.skipped_entries,
        }
    }
}
