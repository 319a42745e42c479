use serde::Serialize;

use super::segment::AddressBlock;
use crate::rules::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Primary,
    Secondary,
    Geography,
}

/// Outcome for one token, with the names of the rules that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub role: Role,
    pub rule: &'static str,
    /// Resolver rule, set only when `rule` deferred to the ambiguity resolver.
    pub resolution: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub text: String,
    pub classification: Classification,
}

impl ClassifiedToken {
    pub fn role(&self) -> Role {
        self.classification.role
    }
}

/// Every token of a block with exactly one role, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedBlock {
    pub tokens: Vec<ClassifiedToken>,
}

impl ClassifiedBlock {
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(move |t| t.role() == role)
            .map(|t| t.text.as_str())
    }
}

pub const TRAILING_GEOGRAPHY: &str = "trailing_geography";
pub const FALLBACK_PRIMARY: &str = "fallback_primary";

enum Outcome {
    Assign(Role),
    Resolve,
}

struct TokenRule {
    name: &'static str,
    applies: fn(&Lexicon, &str) -> bool,
    outcome: Outcome,
}

fn has_secondary_keyword(lexicon: &Lexicon, token: &str) -> bool {
    lexicon.secondary.matches(token)
}

fn has_primary_keyword(lexicon: &Lexicon, token: &str) -> bool {
    lexicon.primary.matches(token)
}

fn has_ambiguous_term(lexicon: &Lexicon, token: &str) -> bool {
    lexicon.ambiguous.matches(token)
}

fn always(_: &Lexicon, _: &str) -> bool {
    true
}

/// Evaluated top to bottom; the first rule that applies wins. The last
/// rule keeps unrecognised fragments as part of the organization name.
const TOKEN_RULES: &[TokenRule] = &[
    TokenRule {
        name: "secondary_keyword",
        applies: has_secondary_keyword,
        outcome: Outcome::Assign(Role::Secondary),
    },
    TokenRule {
        name: "primary_keyword",
        applies: has_primary_keyword,
        outcome: Outcome::Assign(Role::Primary),
    },
    TokenRule {
        name: "ambiguous_term",
        applies: has_ambiguous_term,
        outcome: Outcome::Resolve,
    },
    TokenRule {
        name: FALLBACK_PRIMARY,
        applies: always,
        outcome: Outcome::Assign(Role::Primary),
    },
];

struct ResolverRule {
    name: &'static str,
    applies: fn(&Lexicon, &str, &[&str]) -> bool,
    role: Role,
}

fn is_whitelisted(lexicon: &Lexicon, token: &str, _: &[&str]) -> bool {
    lexicon.is_independent(token)
}

fn has_university_sibling(lexicon: &Lexicon, _: &str, siblings: &[&str]) -> bool {
    siblings.iter().any(|s| lexicon.university.matches(s))
}

fn has_professional_qualifier(lexicon: &Lexicon, token: &str, _: &[&str]) -> bool {
    lexicon.professional.matches(token)
}

fn is_unit_of(lexicon: &Lexicon, token: &str, _: &[&str]) -> bool {
    lexicon.is_unit_of(token)
}

/// "Amherst College": a proper name before the term. Tokens leading with
/// the term were already taken by the unit-of rule.
fn is_proper_name(lexicon: &Lexicon, token: &str, _: &[&str]) -> bool {
    token.split_whitespace().nth(1).is_some() && lexicon.proper_name.matches(token)
}

fn otherwise(_: &Lexicon, _: &str, _: &[&str]) -> bool {
    true
}

const RESOLVER_RULES: &[ResolverRule] = &[
    ResolverRule {
        name: "independent_whitelist",
        applies: is_whitelisted,
        role: Role::Primary,
    },
    ResolverRule {
        name: "university_sibling",
        applies: has_university_sibling,
        role: Role::Secondary,
    },
    ResolverRule {
        name: "professional_qualifier",
        applies: has_professional_qualifier,
        role: Role::Primary,
    },
    ResolverRule {
        name: "unit_of_pattern",
        applies: is_unit_of,
        role: Role::Secondary,
    },
    ResolverRule {
        name: "proper_name",
        applies: is_proper_name,
        role: Role::Primary,
    },
    ResolverRule {
        name: "default_secondary",
        applies: otherwise,
        role: Role::Secondary,
    },
];

/// Decides whether a "College"/"School" style token is a top-level body
/// or a sub-unit, given the other tokens of its block.
pub struct AmbiguityResolver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> AmbiguityResolver<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the role and the name of the rule that produced it. Token and
    /// siblings are judged in abbreviated form, so a name resolves the same
    /// way before and after normalization.
    pub fn resolve(&self, token: &str, siblings: &[&str]) -> (Role, &'static str) {
        let token = self.lexicon.abbreviate(token);
        let siblings: Vec<String> = siblings.iter().map(|s| self.lexicon.abbreviate(s)).collect();
        let siblings: Vec<&str> = siblings.iter().map(String::as_str).collect();
        self.resolve_abbreviated(&token, &siblings)
    }

    fn resolve_abbreviated(&self, token: &str, siblings: &[&str]) -> (Role, &'static str) {
        RESOLVER_RULES
            .iter()
            .find(|rule| (rule.applies)(self.lexicon, token, siblings))
            .map(|rule| (rule.role, rule.name))
            .unwrap_or((Role::Secondary, "default_secondary"))
    }
}

pub struct Classifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Classifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Rules see the abbreviated token, which keeps the outcome stable when
    /// normalized output is classified again.
    pub fn classify_token(&self, token: &str, siblings: &[&str]) -> Classification {
        let token = self.lexicon.abbreviate(token);
        for rule in TOKEN_RULES {
            if !(rule.applies)(self.lexicon, &token) {
                continue;
            }
            return match rule.outcome {
                Outcome::Assign(role) => Classification {
                    role,
                    rule: rule.name,
                    resolution: None,
                },
                Outcome::Resolve => {
                    let siblings: Vec<String> =
                        siblings.iter().map(|s| self.lexicon.abbreviate(s)).collect();
                    let siblings: Vec<&str> = siblings.iter().map(String::as_str).collect();
                    let (role, resolution) = AmbiguityResolver::new(self.lexicon)
                        .resolve_abbreviated(&token, &siblings);
                    Classification {
                        role,
                        rule: rule.name,
                        resolution: Some(resolution),
                    }
                }
            };
        }

        Classification {
            role: Role::Primary,
            rule: FALLBACK_PRIMARY,
            resolution: None,
        }
    }

    /// Splits off the provisional geography: the last token when it carries
    /// no organizational keyword, and the one before it on the same terms
    /// as long as an organizational token remains. A single-token block
    /// counts as geography only when it is a known country.
    pub fn split_geography<'b>(&self, tokens: &'b [String]) -> (&'b [String], &'b [String]) {
        let n = tokens.len();
        let last_is_geo = match tokens {
            [] => false,
            [only] => self.lexicon.is_country(only),
            [.., last] => !self.lexicon.is_organizational(last),
        };
        if !last_is_geo {
            return (tokens, &[]);
        }

        let mut start = n - 1;
        if n >= 3 && !self.lexicon.is_organizational(&tokens[n - 2]) {
            start = n - 2;
        }
        tokens.split_at(start)
    }

    pub fn classify(&self, block: &AddressBlock) -> ClassifiedBlock {
        let (organization, geography) = self.split_geography(block.tokens());
        let names: Vec<&str> = organization.iter().map(String::as_str).collect();

        let mut tokens = Vec::with_capacity(block.len());
        for (idx, token) in names.iter().enumerate() {
            let siblings: Vec<&str> = names
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != idx)
                .map(|(_, s)| *s)
                .collect();
            tokens.push(ClassifiedToken {
                text: token.to_string(),
                classification: self.classify_token(token, &siblings),
            });
        }

        tokens.extend(geography.iter().map(|token| ClassifiedToken {
            text: token.clone(),
            classification: Classification {
                role: Role::Geography,
                rule: TRAILING_GEOGRAPHY,
                resolution: None,
            },
        }));

        ClassifiedBlock { tokens }
    }
}
