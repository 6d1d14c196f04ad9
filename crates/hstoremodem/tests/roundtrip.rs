#![allow(missing_docs)]

use std::borrow::Cow;

use hstoremodem::parse;
use quickcheck_macros::quickcheck;

/// Minimal encoder for the round-trip property: always quotes, escapes the
/// two characters the format escapes, and writes unquoted `NULL` for absent
/// values.
fn encode(pairs: &[(String, Option<String>)]) -> String {
    let mut out = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_quoted(&mut out, key);
        out.push_str("=>");
        match value {
            Some(value) => push_quoted(&mut out, value),
            None => out.push_str("NULL"),
        }
    }
    out
}

fn push_quoted(out: &mut String, token: &str) {
    out.push('"');
    for ch in token.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
}

fn decode(raw: &str) -> Option<Vec<(String, Option<String>)>> {
    parse(raw)
        .map(|entry| {
            entry
                .map(|entry| (entry.key.into_owned(), entry.value.map(Cow::into_owned)))
                .ok()
        })
        .collect()
}

#[quickcheck]
fn encode_then_parse_is_identity(pairs: Vec<(String, Option<String>)>) -> bool {
    decode(&encode(&pairs)).as_deref() == Some(&pairs[..])
}

#[quickcheck]
fn trailing_comma_never_changes_the_result(pairs: Vec<(String, Option<String>)>) -> bool {
    if pairs.is_empty() {
        return true;
    }
    let raw = encode(&pairs);
    let with_comma = format!("{raw},");
    decode(&raw) == decode(&with_comma)
}

#[quickcheck]
fn surrounding_whitespace_never_changes_the_result(pairs: Vec<(String, Option<String>)>) -> bool {
    let raw = encode(&pairs);
    let padded = format!(" \t{raw}\n ");
    decode(&raw) == decode(&padded)
}
