//! Placeholder tokens in campaign messages.
//!
//! A token is a header name wrapped in braces, e.g. `{first_name}`. Composing
//! a message only ever appends tokens ([`append_token`]); resolving them
//! against a contact row happens per recipient ([`substitute`]). Resolution is
//! total: a token that names an unknown header, or a header whose cell is
//! missing from the row, stays in the output exactly as written.

use crate::model::table::{Row, Table};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("token pattern is valid"));

/// Token text for `header`.
pub fn token(header: &str) -> String {
    format!("{{{}}}", header)
}

/// Returns `message` with the token for `header` appended. No deduplication:
/// appending the same header twice yields two tokens.
pub fn append_token(message: &str, header: &str) -> String {
    let mut updated = String::with_capacity(message.len() + header.len() + 2);
    updated.push_str(message);
    updated.push_str(&token(header));
    updated
}

/// Token names in order of appearance, duplicates included.
pub fn tokens(template: &str) -> Vec<&str> {
    TOKEN_RE
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Distinct token names that do not match any header, in order of first
/// appearance.
pub fn unknown_tokens<'a>(template: &'a str, headers: &[String]) -> Vec<&'a str> {
    let mut unknown: Vec<&str> = Vec::new();
    for name in tokens(template) {
        if !headers.iter().any(|h| h == name) && !unknown.contains(&name) {
            unknown.push(name);
        }
    }
    unknown
}

/// Replaces every resolvable token with the cell at its header's position.
///
/// Headers are matched exactly (they are already normalized); with duplicate
/// headers the first position wins.
pub fn substitute(template: &str, headers: &[String], row: &Row) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &Captures| {
            let whole = caps.get(0).map(|m| m.as_str()).unwrap_or("");
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| row.get(i))
                .cloned()
                .unwrap_or_else(|| whole.to_string())
        })
        .into_owned()
}

/// Renders `template` for the first row of `table`, or returns it unchanged
/// when the table has no rows.
pub fn preview(template: &str, table: &Table) -> String {
    match table.rows.first() {
        Some(row) => substitute(template, &table.headers, row),
        None => template.to_string(),
    }
}
