use tracing::debug;

use crate::rules::Lexicon;

/// Contiguous tokens describing a single institution's address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBlock {
    tokens: Vec<String>,
}

impl AddressBlock {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Splits an author group's tokens into blocks at country names.
pub struct Segmenter<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Segmenter<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Each country token closes the block it ends. Tokens after the last
    /// country form one more block. Single-token fragments are dropped when
    /// a fuller block exists next to them; a lone token is still returned as
    /// its own block.
    pub fn segment<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<AddressBlock> {
        let tokens: Vec<&str> = tokens
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => return Vec::new(),
            [only] => return vec![AddressBlock::new(vec![only.to_string()])],
            _ => {}
        }

        let mut blocks = Vec::new();
        let mut current = Vec::new();
        for token in tokens {
            current.push(token.to_string());
            if self.lexicon.is_country_boundary(token) {
                blocks.push(AddressBlock::new(std::mem::take(&mut current)));
            }
        }
        if !current.is_empty() {
            blocks.push(AddressBlock::new(current));
        }

        if blocks.len() > 1 && blocks.iter().any(|block| block.len() >= 2) {
            blocks.retain(|block| {
                if block.len() < 2 {
                    debug!("Dropping fragment {:?}", block.tokens());
                    return false;
                }
                true
            });
        }

        blocks
    }
}
