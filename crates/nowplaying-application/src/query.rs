// SPDX-License-Identifier: GPL-3.0-or-later

//! Search query construction from hints.
//!
//! Both builders emit clauses in artist, album, track order and skip hints
//! without a usable value, so identical hints always give the same string.
//! Hints with no usable value produce an empty query.

use crate::hints::Hints;

/// Conjunctive, field-scoped query: `artist:"A" AND recording:"T"`.
pub fn structured(hints: &Hints) -> String {
    hints
        .values()
        .map(|(field, value)| format!("{}:{}", field.search_field(), quote(value)))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Disjunctive query over bare phrases: `"A" OR "T"`.
pub fn relaxed(hints: &Hints) -> String {
    hints
        .values()
        .map(|(_, value)| quote(value))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Wrap a value in a Lucene phrase, escaping characters that would end it early.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
