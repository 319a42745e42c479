/// One author-group entry: `Lastname, Firstname, token, token, ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAffiliationRecord {
    /// `"Lastname, Firstname"`
    pub author: String,
    pub tokens: Vec<String>,
}

impl RawAffiliationRecord {
    /// Returns `None` when the entry lacks a two-part author prefix or has
    /// no address token after it.
    pub fn parse(entry: &str) -> Option<Self> {
        let parts: Vec<&str> = entry.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return None;
        }

        let (last_name, first_name) = (parts[0], parts[1]);
        if last_name.is_empty() || first_name.is_empty() {
            return None;
        }

        let tokens: Vec<String> = parts[2..]
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();
        if tokens.is_empty() {
            return None;
        }

        Some(Self {
            author: format!("{}, {}", last_name, first_name),
            tokens,
        })
    }
}

/// Semicolon-delimited author-group entries, trimmed, blanks dropped.
pub fn split_entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';').map(str::trim).filter(|e| !e.is_empty())
}
