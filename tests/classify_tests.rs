use scopus_affil::parse::{AddressBlock, AffiliationParser, Role, FALLBACK_PRIMARY, TRAILING_GEOGRAPHY};
use scopus_affil::Rules;

fn parser() -> AffiliationParser {
    AffiliationParser::new(&Rules::default()).unwrap()
}

fn block(tokens: &[&str]) -> AddressBlock {
    AddressBlock::new(tokens.iter().map(|t| t.to_string()).collect())
}

fn roles(tokens: &[&str]) -> Vec<(String, Role)> {
    parser()
        .classifier()
        .classify(&block(tokens))
        .tokens
        .into_iter()
        .map(|t| {
            let role = t.role();
            (t.text, role)
        })
        .collect()
}

#[test]
fn test_keyword_rules_in_priority_order() {
    let parser = parser();
    let classifier = parser.classifier();

    let dept = classifier.classify_token("Department of Oncology", &[]);
    assert_eq!(dept.role, Role::Secondary);
    assert_eq!(dept.rule, "secondary_keyword");
    assert_eq!(dept.resolution, None);

    let univ = classifier.classify_token("University of Example", &[]);
    assert_eq!(univ.role, Role::Primary);
    assert_eq!(univ.rule, "primary_keyword");

    // Secondary keywords win over primary ones in the same token.
    let lab = classifier.classify_token("Laboratory of the Hospital Institute", &[]);
    assert_eq!(lab.role, Role::Secondary);
    assert_eq!(lab.rule, "secondary_keyword");
}

#[test]
fn test_unrecognized_token_falls_back_to_primary() {
    let parser = parser();
    let outcome = parser.classifier().classify_token("CNRS", &[]);
    assert_eq!(outcome.role, Role::Primary);
    assert_eq!(outcome.rule, FALLBACK_PRIMARY);
}

#[test]
fn test_college_with_university_sibling_is_secondary() {
    let parser = parser();
    let outcome = parser
        .classifier()
        .classify_token("College of Medicine", &["University of Florida", "Gainesville"]);
    assert_eq!(outcome.role, Role::Secondary);
    assert_eq!(outcome.rule, "ambiguous_term");
    assert_eq!(outcome.resolution, Some("university_sibling"));
}

#[test]
fn test_college_with_professional_qualifier_is_primary() {
    let parser = parser();
    let outcome = parser
        .classifier()
        .classify_token("College of Medicine", &["Gainesville"]);
    assert_eq!(outcome.role, Role::Primary);
    assert_eq!(outcome.resolution, Some("professional_qualifier"));
}

#[test]
fn test_resolver_rules() {
    let parser = parser();
    let resolver = scopus_affil::parse::AmbiguityResolver::new(parser.lexicon());

    let cases: &[(&str, &[&str], Role, &str)] = &[
        (
            "Imperial College London",
            &["London", "UK"],
            Role::Primary,
            "independent_whitelist",
        ),
        (
            "College of Pharmacy",
            &["University of California", "San Francisco"],
            Role::Secondary,
            "university_sibling",
        ),
        (
            "Johns Hopkins School of Medicine",
            &["Baltimore"],
            Role::Primary,
            "professional_qualifier",
        ),
        (
            "College of Arts and Sciences",
            &[],
            Role::Secondary,
            "unit_of_pattern",
        ),
        ("Amherst College", &[], Role::Primary, "proper_name"),
        ("Graduate School", &[], Role::Secondary, "default_secondary"),
    ];

    for (token, siblings, role, rule) in cases {
        assert_eq!(resolver.resolve(token, siblings), (*role, *rule), "{}", token);
    }
}

#[test]
fn test_whitelist_beats_university_sibling() {
    let parser = parser();
    let resolver = scopus_affil::parse::AmbiguityResolver::new(parser.lexicon());
    assert_eq!(
        resolver.resolve("Harvard Medical School", &["Harvard University"]),
        (Role::Primary, "independent_whitelist")
    );
}

#[test]
fn test_abbreviated_names_resolve_like_full_names() {
    let parser = parser();
    let resolver = scopus_affil::parse::AmbiguityResolver::new(parser.lexicon());

    assert_eq!(
        resolver.resolve("Coll Arts & Sci", &[]),
        (Role::Secondary, "unit_of_pattern")
    );
    assert_eq!(
        resolver.resolve("Harvard Med Sch", &["Harvard Univ"]),
        (Role::Primary, "independent_whitelist")
    );
    assert_eq!(
        resolver.resolve("Coll Pharm", &["Univ California"]),
        (Role::Secondary, "university_sibling")
    );
    assert_eq!(resolver.resolve("Amherst Coll", &[]), (Role::Primary, "proper_name"));
}

#[test]
fn test_classify_token_agrees_on_full_and_abbreviated_spelling() {
    let parser = parser();
    let classifier = parser.classifier();

    let pairs: &[(&str, &str, &[&str])] = &[
        ("College of Arts and Sciences", "Coll Arts & Sci", &["Acme Institute"]),
        ("Harvard Medical School", "Harvard Med Sch", &["Harvard University"]),
        ("School of Medicine", "Sch Med", &["Acme Research Center"]),
        ("Graduate School", "Grad Sch", &["Kyoto University"]),
        ("Department of Physics", "Dept Phys", &[]),
        ("Hospital of Example", "Hosp Example", &[]),
    ];

    for (full, short, siblings) in pairs {
        let a = classifier.classify_token(full, siblings);
        let b = classifier.classify_token(short, siblings);
        assert_eq!((a.role, a.rule, a.resolution), (b.role, b.rule, b.resolution), "{}", full);
    }
}

#[test]
fn test_trailing_city_and_country_are_geography() {
    assert_eq!(
        roles(&["Department of Oncology", "University of Example", "Example City", "United States"]),
        vec![
            ("Department of Oncology".to_string(), Role::Secondary),
            ("University of Example".to_string(), Role::Primary),
            ("Example City".to_string(), Role::Geography),
            ("United States".to_string(), Role::Geography),
        ]
    );
}

#[test]
fn test_geography_rule_name_is_reported() {
    let parser = parser();
    let classified = parser
        .classifier()
        .classify(&block(&["Mayo Clinic", "Rochester", "United States"]));
    let geo: Vec<&str> = classified
        .tokens
        .iter()
        .filter(|t| t.classification.rule == TRAILING_GEOGRAPHY)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(geo, vec!["Rochester", "United States"]);
}

#[test]
fn test_organizational_last_token_is_not_geography() {
    assert_eq!(
        roles(&["Department of Surgery", "Mayo Clinic"]),
        vec![
            ("Department of Surgery".to_string(), Role::Secondary),
            ("Mayo Clinic".to_string(), Role::Primary),
        ]
    );
}

#[test]
fn test_at_least_one_organizational_token_remains() {
    assert_eq!(
        roles(&["CNRS", "France"]),
        vec![
            ("CNRS".to_string(), Role::Primary),
            ("France".to_string(), Role::Geography),
        ]
    );
}

#[test]
fn test_single_token_block_is_geography_only_when_a_country() {
    assert_eq!(roles(&["Italy"]), vec![("Italy".to_string(), Role::Geography)]);
    assert_eq!(roles(&["Acme Corp"]), vec![("Acme Corp".to_string(), Role::Primary)]);
}

#[test]
fn test_postal_code_pushes_city_into_organization() {
    // Only two trailing tokens are considered geography; the city before a
    // postal code falls through to the primary fallback.
    let parser = parser();
    let classified = parser.classifier().classify(&block(&[
        "Johns Hopkins University",
        "Baltimore",
        "MD 21205",
        "United States",
    ]));
    let baltimore = &classified.tokens[1];
    assert_eq!(baltimore.text, "Baltimore");
    assert_eq!(baltimore.role(), Role::Primary);
    assert_eq!(baltimore.classification.rule, FALLBACK_PRIMARY);
    assert_eq!(classified.tokens[2].role(), Role::Geography);
}

#[test]
fn test_short_institution_acronym_reads_as_city() {
    // An acronym with no keyword in the city slot is indistinguishable from a city.
    assert_eq!(
        roles(&["Department of Chemistry", "MIT", "United States"]),
        vec![
            ("Department of Chemistry".to_string(), Role::Secondary),
            ("MIT".to_string(), Role::Geography),
            ("United States".to_string(), Role::Geography),
        ]
    );
}
