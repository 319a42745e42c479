use scopus_affil::rules::{load_rules, resolve_rules, run, KeywordSet, Lexicon, Rules, RulesArgs};
use std::fs;
use tempfile::TempDir;

fn keywords(list: &[&str]) -> KeywordSet {
    let owned: Vec<String> = list.iter().map(|s| s.to_string()).collect();
    KeywordSet::compile(&owned).unwrap()
}

fn default_lexicon() -> Lexicon {
    Lexicon::compile(&Rules::default()).unwrap()
}

#[test]
fn test_keyword_matches_whole_words_only() {
    let set = keywords(&["Unit"]);
    assert!(set.matches("Intensive Care Unit"));
    assert!(set.matches("unit of neurology"));
    assert!(!set.matches("United States"));
    assert!(!set.matches("Community"));
}

#[test]
fn test_trailing_star_matches_word_prefix() {
    let set = keywords(&["Universit*"]);
    assert!(set.matches("Università di Pavia"));
    assert!(set.matches("Universität Wien"));
    assert!(set.matches("University of Oxford"));
    assert!(!set.matches("Univ Oxford"));
}

#[test]
fn test_phrase_keyword_tolerates_extra_whitespace() {
    let set = keywords(&["Public Health"]);
    assert!(set.matches("School of Public   Health"));
    assert!(!set.matches("Public Library"));
}

#[test]
fn test_empty_keyword_list_never_matches() {
    let set = keywords(&[]);
    assert!(!set.matches("University"));
    assert!(!set.matches(""));
}

#[test]
fn test_country_boundary_requires_at_most_two_words() {
    let lexicon = default_lexicon();
    assert!(lexicon.is_country_boundary("Japan"));
    assert!(lexicon.is_country_boundary("United States"));
    assert!(lexicon.is_country_boundary("  south   africa "));
    assert!(lexicon.is_country("Bosnia and Herzegovina"));
    assert!(!lexicon.is_country_boundary("Bosnia and Herzegovina"));
    assert!(!lexicon.is_country_boundary("Japan Society for the Promotion of Science"));
}

#[test]
fn test_us_state_named_georgia_is_not_a_country() {
    let lexicon = default_lexicon();
    assert!(!lexicon.is_country("Georgia"));
}

#[test]
fn test_standardize_country_uses_alias_table() {
    let lexicon = default_lexicon();
    assert_eq!(lexicon.standardize_country("United States"), "USA");
    assert_eq!(lexicon.standardize_country("united  states"), "USA");
    assert_eq!(lexicon.standardize_country("China"), "Peoples R China");
    assert_eq!(lexicon.standardize_country("UK"), "England");
    assert_eq!(lexicon.standardize_country("Northern Ireland"), "North Ireland");
    assert_eq!(lexicon.standardize_country("Turkey"), "Turkiye");
    assert_eq!(lexicon.standardize_country("Korea"), "South Korea");
    assert_eq!(lexicon.standardize_country("Italy"), "Italy");
    assert_eq!(lexicon.standardize_country("Example  City"), "Example City");
}

#[test]
fn test_standard_names_are_recognized_and_stable() {
    let lexicon = default_lexicon();
    for standard in ["USA", "Peoples R China", "England", "Turkiye", "South Korea"] {
        assert!(lexicon.is_standard_country(standard), "{}", standard);
        assert!(lexicon.is_country(standard), "{}", standard);
        assert!(!lexicon.is_country_alias(standard), "{}", standard);
        assert_eq!(lexicon.standardize_country(standard), standard);
    }
    assert!(lexicon.is_country_alias("China"));
    assert!(!lexicon.is_standard_country("China"));
}

#[test]
fn test_organizational_keywords() {
    let lexicon = default_lexicon();
    assert!(lexicon.is_organizational("Department of Surgery"));
    assert!(lexicon.is_organizational("Mayo Clinic"));
    assert!(lexicon.is_organizational("School of Medicine"));
    assert!(!lexicon.is_organizational("Rochester"));
    assert!(!lexicon.is_organizational("United States"));
}

#[test]
fn test_unit_of_and_secondary_prefix() {
    let lexicon = default_lexicon();
    assert!(lexicon.is_unit_of("College of Arts and Sciences"));
    assert!(lexicon.is_unit_of("school of nursing"));
    assert!(!lexicon.is_unit_of("Boston College"));
    assert!(lexicon.is_unit_of("Coll Arts & Sci"));
    assert!(lexicon.is_unit_of("Sch Nurs"));
    assert!(!lexicon.is_unit_of("Amherst Coll"));
    assert!(lexicon.has_secondary_prefix("Department of Surgery"));
    assert!(lexicon.has_secondary_prefix("center for  Cancer Research"));
    assert!(!lexicon.has_secondary_prefix("Cancer Center"));
}

#[test]
fn test_whitelist_matches_abbreviated_spelling() {
    let lexicon = default_lexicon();
    assert!(lexicon.is_independent("Harvard Medical School"));
    assert!(lexicon.is_independent("Harvard Med Sch"));
    assert!(lexicon.is_independent("Imperial Coll London"));
    assert!(lexicon.is_independent("Albert Einstein Coll Med"));
    assert!(!lexicon.is_independent("Harvard Univ"));
}

#[test]
fn test_lexicon_abbreviate_is_stable() {
    let lexicon = default_lexicon();
    assert_eq!(lexicon.abbreviate("College of Arts and Sciences"), "Coll Arts & Sci");
    assert_eq!(lexicon.abbreviate("Coll Arts & Sci"), "Coll Arts & Sci");
    assert_eq!(lexicon.abbreviate("Harvard Medical School"), "Harvard Med Sch");
}

#[test]
fn test_load_rules_keeps_defaults_for_missing_fields() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");
    fs::write(&path, r#"{"min_summary_chars": 5}"#).unwrap();

    let rules = load_rules(&path).unwrap();
    let defaults = Rules::default();

    assert_eq!(rules.min_summary_chars, 5);
    assert_eq!(rules.countries, defaults.countries);
    assert_eq!(rules.abbreviations, defaults.abbreviations);
}

#[test]
fn test_load_rules_present_field_replaces_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");
    fs::write(&path, r#"{"country_names": {"Deutschland": "Germany"}}"#).unwrap();

    let rules = load_rules(&path).unwrap();
    let lexicon = Lexicon::compile(&rules).unwrap();

    assert_eq!(lexicon.standardize_country("Deutschland"), "Germany");
    assert_eq!(lexicon.standardize_country("United States"), "United States");
    assert!(lexicon.is_country_boundary("Deutschland"));
}

#[test]
fn test_load_rules_reports_bad_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_rules(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse rules file"));
}

#[test]
fn test_load_rules_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_rules(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to open rules file"));
}

#[test]
fn test_resolve_rules_without_path_uses_defaults() {
    let rules = resolve_rules(None).unwrap();
    assert_eq!(rules.min_summary_chars, 10);
    assert!(!rules.countries.is_empty());
}

#[test]
fn test_rules_command_writes_loadable_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("rules.json");

    run(RulesArgs {
        output: output.clone(),
    })
    .unwrap();

    let rules = load_rules(&output).unwrap();
    let defaults = Rules::default();
    assert_eq!(rules.countries, defaults.countries);
    assert_eq!(rules.country_names, defaults.country_names);
    assert_eq!(rules.name_cleaning, defaults.name_cleaning);
}
