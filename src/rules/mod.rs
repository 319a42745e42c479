mod defaults;
mod lexicon;
pub use lexicon::{KeywordSet, Lexicon, Substitution};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Every lookup table the parser consults.
///
/// Keyword lists match case-insensitively on whole words or phrases. A
/// trailing `*` turns a keyword into a word prefix, so `Universit*` covers
/// `University`, `Università` and `Universität` while `Unit` still refuses
/// to match inside `United States`.
///
/// When loaded from JSON, a missing field keeps its built-in table and a
/// present field replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Gazetteer used for block segmentation.
    pub countries: Vec<String>,
    /// Source spelling -> standardized spelling, matched on the final token only.
    pub country_names: BTreeMap<String, String>,
    pub secondary_keywords: Vec<String>,
    pub primary_keywords: Vec<String>,
    /// Terms that name either a top-level body or a sub-unit ("College", "School").
    pub ambiguous_keywords: Vec<String>,
    pub university_keywords: Vec<String>,
    pub professional_qualifiers: Vec<String>,
    /// Colleges and schools known to stand on their own.
    pub independent_institutions: Vec<String>,
    pub proper_name_terms: Vec<String>,
    pub abbreviations: BTreeMap<String, String>,
    pub filler_words: Vec<String>,
    /// Extra keywords accepted by the primary-institution summary.
    pub summary_keywords: Vec<String>,
    pub secondary_prefixes: Vec<String>,
    /// Ordered replacements that spell out institution names for the summary.
    pub name_cleaning: Vec<(String, String)>,
    pub min_summary_chars: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            countries: defaults::owned(defaults::COUNTRIES),
            country_names: defaults::owned_pairs(defaults::COUNTRY_NAMES)
                .into_iter()
                .collect(),
            secondary_keywords: defaults::owned(defaults::SECONDARY_KEYWORDS),
            primary_keywords: defaults::owned(defaults::PRIMARY_KEYWORDS),
            ambiguous_keywords: defaults::owned(defaults::AMBIGUOUS_KEYWORDS),
            university_keywords: defaults::owned(defaults::UNIVERSITY_KEYWORDS),
            professional_qualifiers: defaults::owned(defaults::PROFESSIONAL_QUALIFIERS),
            independent_institutions: defaults::owned(defaults::INDEPENDENT_INSTITUTIONS),
            proper_name_terms: defaults::owned(defaults::PROPER_NAME_TERMS),
            abbreviations: defaults::owned_pairs(defaults::ABBREVIATIONS)
                .into_iter()
                .collect(),
            filler_words: defaults::owned(defaults::FILLER_WORDS),
            summary_keywords: defaults::owned(defaults::SUMMARY_KEYWORDS),
            secondary_prefixes: defaults::owned(defaults::SECONDARY_PREFIXES),
            name_cleaning: defaults::owned_pairs(defaults::NAME_CLEANING),
            min_summary_chars: defaults::MIN_SUMMARY_CHARS,
        }
    }
}

/// Load a rules file, falling back to built-in tables for absent fields.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<Rules> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open rules file {}", path.display()))?;
    let rules: Rules = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse rules file {}", path.display()))?;
    Ok(rules)
}

/// Built-in rules, or the given file when one is passed on the command line.
pub fn resolve_rules(path: Option<&Path>) -> Result<Rules> {
    match path {
        Some(path) => load_rules(path),
        None => Ok(Rules::default()),
    }
}

#[derive(Args)]
pub struct RulesArgs {
    /// Where to write the default rules as JSON
    #[arg(short, long, default_value = "rules.json")]
    pub output: PathBuf,
}

pub fn run(args: RulesArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scopus_affil=info".parse()?),
        )
        .try_init()
        .ok();

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &Rules::default())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!("Wrote default rules to {}", args.output.display());
    Ok(())
}
