use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use super::reorder::NormalizedInstitution;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInstitutionPair {
    pub author: String,
    pub institution: NormalizedInstitution,
}

/// Authors sharing one institution, rendered as `[A; B] Institution.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedAddressBlock {
    pub authors: Vec<String>,
    pub institution: NormalizedInstitution,
}

impl FormattedAddressBlock {
    pub fn render(&self) -> String {
        format!(
            "[{}] {}.",
            self.authors.join("; "),
            self.institution.as_str().trim_end_matches('.')
        )
    }
}

impl fmt::Display for FormattedAddressBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// One block per distinct institution string, in order of first appearance.
/// Authors keep first-seen order and appear once per block; an author with
/// several institutions shows up in each of them.
pub fn group_by_institution<I>(pairs: I) -> Vec<FormattedAddressBlock>
where
    I: IntoIterator<Item = AuthorInstitutionPair>,
{
    let mut groups: IndexMap<NormalizedInstitution, Vec<String>> = IndexMap::new();

    for pair in pairs {
        let authors = groups.entry(pair.institution).or_default();
        if !authors.contains(&pair.author) {
            authors.push(pair.author);
        }
    }

    groups
        .into_iter()
        .map(|(institution, authors)| FormattedAddressBlock {
            authors,
            institution,
        })
        .collect()
}
