use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use super::Rules;

/// Case-insensitive whole-word matcher over a keyword list.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    matcher: Option<Regex>,
}

impl KeywordSet {
    pub fn compile(keywords: &[String]) -> Result<Self> {
        let alternatives: Vec<String> = keywords.iter().filter_map(|k| keyword_pattern(k)).collect();
        if alternatives.is_empty() {
            return Ok(Self { matcher: None });
        }
        let pattern = format!("(?i)(?:{})", alternatives.join("|"));
        let matcher = Regex::new(&pattern)
            .with_context(|| format!("Invalid keyword list {:?}", keywords))?;
        Ok(Self {
            matcher: Some(matcher),
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.matcher.as_ref().is_some_and(|m| m.is_match(text))
    }
}

/// A whole-word, case-insensitive replacement.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: String,
}

impl Substitution {
    fn compile(from: &str, to: &str) -> Result<Option<Self>> {
        let Some(pattern) = keyword_pattern(from) else {
            return Ok(None);
        };
        let pattern = Regex::new(&format!("(?i){}", pattern))
            .with_context(|| format!("Invalid substitution {:?}", from))?;
        Ok(Some(Self {
            pattern,
            replacement: to.to_string(),
        }))
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern
            .replace_all(text, NoExpand(self.replacement.as_str()))
    }
}

/// Regex fragment for one keyword: `\b` on word edges, `\s+` between the
/// words of a phrase, `\w*` for a trailing `*`.
fn keyword_pattern(keyword: &str) -> Option<String> {
    let keyword = keyword.trim();
    let (stem, prefix) = match keyword.strip_suffix('*') {
        Some(stem) => (stem.trim_end(), true),
        None => (keyword, false),
    };
    if stem.is_empty() {
        return None;
    }

    let mut pattern = String::new();
    if stem.starts_with(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    let words: Vec<String> = stem.split_whitespace().map(regex::escape).collect();
    pattern.push_str(&words.join(r"\s+"));
    if prefix {
        pattern.push_str(r"\w*\b");
    } else if stem.ends_with(char::is_alphanumeric) {
        pattern.push_str(r"\b");
    }
    Some(pattern)
}

/// Lowercased, whitespace-collapsed form used for table lookups.
pub(crate) fn fold(text: &str) -> String {
    text.replace('\u{2019}', "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Rules compiled for matching. Built once and shared read-only by every
/// parser component.
#[derive(Debug, Clone)]
pub struct Lexicon {
    gazetteer: HashSet<String>,
    country_names: HashMap<String, String>,
    standard_countries: HashSet<String>,
    pub secondary: KeywordSet,
    pub primary: KeywordSet,
    pub ambiguous: KeywordSet,
    pub university: KeywordSet,
    pub professional: KeywordSet,
    pub proper_name: KeywordSet,
    /// Primary keywords plus the summary-only extras.
    pub summary: KeywordSet,
    independent: Vec<String>,
    unit_of: Option<Regex>,
    abbreviations: Vec<Substitution>,
    fillers: HashSet<String>,
    name_cleaning: Vec<Substitution>,
    secondary_prefixes: Vec<String>,
    pub min_summary_chars: usize,
}

impl Lexicon {
    pub fn compile(rules: &Rules) -> Result<Self> {
        let country_names: HashMap<String, String> = rules
            .country_names
            .iter()
            .map(|(alias, standard)| (fold(alias), standard.trim().to_string()))
            .collect();

        let mut gazetteer: HashSet<String> = rules.countries.iter().map(|c| fold(c)).collect();
        gazetteer.extend(country_names.keys().cloned());
        gazetteer.extend(country_names.values().map(|v| fold(v)));

        let standard_countries = gazetteer
            .iter()
            .filter(|name| match country_names.get(*name) {
                Some(standard) => fold(standard) == **name,
                None => true,
            })
            .cloned()
            .collect();

        let unit_of = {
            let alternatives: Vec<String> = rules
                .ambiguous_keywords
                .iter()
                .filter_map(|k| keyword_pattern(k))
                .collect();
            if alternatives.is_empty() {
                None
            } else {
                let pattern = format!(r"(?i)^\s*(?:{})\s+\w", alternatives.join("|"));
                Some(Regex::new(&pattern).context("Invalid ambiguous keyword list")?)
            }
        };

        // Longest phrase first so "degli Studi di" goes before any single word in it.
        let mut abbreviation_pairs: Vec<(&String, &String)> = rules.abbreviations.iter().collect();
        abbreviation_pairs.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(b.0))
        });
        let mut abbreviations = Vec::with_capacity(abbreviation_pairs.len());
        for (from, to) in abbreviation_pairs {
            abbreviations.extend(Substitution::compile(from, to)?);
        }

        let mut name_cleaning = Vec::with_capacity(rules.name_cleaning.len());
        for (from, to) in &rules.name_cleaning {
            name_cleaning.extend(Substitution::compile(from, to)?);
        }

        let summary_keywords: Vec<String> = rules
            .primary_keywords
            .iter()
            .chain(&rules.summary_keywords)
            .cloned()
            .collect();

        let mut lexicon = Self {
            gazetteer,
            country_names,
            standard_countries,
            secondary: KeywordSet::compile(&rules.secondary_keywords)?,
            primary: KeywordSet::compile(&rules.primary_keywords)?,
            ambiguous: KeywordSet::compile(&rules.ambiguous_keywords)?,
            university: KeywordSet::compile(&rules.university_keywords)?,
            professional: KeywordSet::compile(&rules.professional_qualifiers)?,
            proper_name: KeywordSet::compile(&rules.proper_name_terms)?,
            summary: KeywordSet::compile(&summary_keywords)?,
            independent: Vec::new(),
            unit_of,
            abbreviations,
            fillers: rules
                .filler_words
                .iter()
                .map(|w| fold(w))
                .filter(|w| !w.is_empty())
                .collect(),
            name_cleaning,
            secondary_prefixes: rules
                .secondary_prefixes
                .iter()
                .map(|p| fold(p))
                .filter(|p| !p.is_empty())
                .collect(),
            min_summary_chars: rules.min_summary_chars,
        };

        // Whitelist entries are kept in both spellings so abbreviated
        // output still matches.
        let mut independent: Vec<String> = Vec::new();
        for name in &rules.independent_institutions {
            for form in [fold(name), fold(&lexicon.abbreviate(name))] {
                if !form.is_empty() && !independent.contains(&form) {
                    independent.push(form);
                }
            }
        }
        lexicon.independent = independent;

        Ok(lexicon)
    }

    pub fn is_country(&self, token: &str) -> bool {
        self.gazetteer.contains(&fold(token))
    }

    /// A gazetteer hit of at most two words. Longer phrases that happen to
    /// equal a country name are left alone.
    pub fn is_country_boundary(&self, token: &str) -> bool {
        token.split_whitespace().count() <= 2 && self.is_country(token)
    }

    /// Standardized spelling of a country token, or the token itself
    /// (whitespace-collapsed) when no mapping exists.
    pub fn standardize_country(&self, token: &str) -> String {
        match self.country_names.get(&fold(token)) {
            Some(standard) => standard.clone(),
            None => token.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }

    pub fn is_standard_country(&self, name: &str) -> bool {
        self.standard_countries.contains(&fold(name))
    }

    /// True when a source alias would be rewritten by [`Self::standardize_country`].
    pub fn is_country_alias(&self, name: &str) -> bool {
        let folded = fold(name);
        self.country_names
            .get(&folded)
            .is_some_and(|standard| fold(standard) != folded)
    }

    pub fn is_organizational(&self, token: &str) -> bool {
        self.secondary.matches(token) || self.primary.matches(token) || self.ambiguous.matches(token)
    }

    pub fn is_independent(&self, token: &str) -> bool {
        let folded = fold(token);
        self.independent.iter().any(|name| folded.contains(name.as_str()))
    }

    /// An ambiguous term leading a longer name: "College of X", "School of X",
    /// and their abbreviated forms "Coll X", "Sch X".
    pub fn is_unit_of(&self, token: &str) -> bool {
        self.unit_of.as_ref().is_some_and(|re| re.is_match(token))
    }

    pub fn has_secondary_prefix(&self, token: &str) -> bool {
        let folded = fold(token);
        self.secondary_prefixes
            .iter()
            .any(|prefix| folded.starts_with(prefix.as_str()))
    }

    pub fn abbreviations(&self) -> &[Substitution] {
        &self.abbreviations
    }

    /// Standalone preposition dropped from abbreviated names.
    pub fn is_filler(&self, word: &str) -> bool {
        self.fillers.contains(&word.to_lowercase())
    }

    /// Substitution table, then standalone prepositions removed and `and`
    /// turned into `&` within each comma-separated component. Empty
    /// components are dropped. Applying it twice changes nothing.
    pub fn abbreviate(&self, text: &str) -> String {
        let mut result = text.to_string();
        for substitution in &self.abbreviations {
            result = substitution.apply(&result).into_owned();
        }

        result
            .split(',')
            .map(|component| {
                component
                    .split_whitespace()
                    .filter(|word| !self.is_filler(word))
                    .map(|word| if word.eq_ignore_ascii_case("and") { "&" } else { word })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|component| !component.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn name_cleaning(&self) -> &[Substitution] {
        &self.name_cleaning
    }
}
