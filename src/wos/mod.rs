//! Web of Science plain-text tagged fields.
//!
//! A field starts with its two-letter tag and a space; continuation lines
//! are indented by three spaces so the value column lines up.

use crate::parse::ParsedAffiliations;

pub const CONTINUATION: &str = "   ";
pub const C3_WIDTH: usize = 80;

/// Renders `lines` under `tag`. Blank lines are skipped; nothing is
/// rendered when no line remains.
pub fn render_field<S: AsRef<str>>(tag: &str, lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines.iter().map(|l| l.as_ref().trim()).filter(|l| !l.is_empty()) {
        if out.is_empty() {
            out.push_str(tag);
            out.push(' ');
        } else {
            out.push('\n');
            out.push_str(CONTINUATION);
        }
        out.push_str(line);
    }
    out
}

/// Greedy word wrap at `width` characters, laid out like [`render_field`].
/// A word longer than `width` gets a line of its own.
pub fn wrap_field(tag: &str, text: &str, width: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= width {
        return render_field(tag, &[text]);
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let extra = if current.is_empty() { 0 } else { 1 };
        if current.chars().count() + extra + word.chars().count() <= width {
            if extra == 1 {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    render_field(tag, &lines)
}

/// `C1` (one line per address block) and `C3` (wrapped), omitting
/// whichever is empty.
pub fn render_address_fields(parsed: &ParsedAffiliations) -> Vec<String> {
    let addresses: Vec<String> = parsed.addresses.iter().map(|b| b.render()).collect();
    [
        render_field("C1", &addresses),
        wrap_field("C3", &parsed.primary_field(), C3_WIDTH),
    ]
    .into_iter()
    .filter(|field| !field.is_empty())
    .collect()
}

/// `UT`, the address fields, then the `ER` terminator.
pub fn render_record(id: &str, parsed: &ParsedAffiliations) -> String {
    let mut fields = Vec::with_capacity(4);
    let ut = render_field("UT", &[id]);
    if !ut.is_empty() {
        fields.push(ut);
    }
    fields.extend(render_address_fields(parsed));
    fields.push("ER".to_string());
    fields.join("\n")
}
