//! Rule-based English lemmatizer.
//!
//! Ordered suffix rewrites for regular inflections plus a small table of
//! irregular forms. Not a morphological analyzer — just enough to fold
//! common surface forms ("questions", "running", "stopped") onto the same
//! vector dimension as their base form.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Irregular forms the suffix rules would mangle.
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("people", "person"),
        ("went", "go"),
        ("gone", "go"),
        ("done", "do"),
        ("said", "say"),
        ("made", "make"),
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
    ]
    .into_iter()
    .collect()
});

/// Reduce a lowercased token to a base form.
///
/// Rules fire longest-suffix-first; short tokens (<= 3 chars) and
/// non-ASCII tokens pass through untouched.
pub fn lemmatize(token: &str) -> String {
    if let Some(base) = IRREGULAR.get(token) {
        return (*base).to_string();
    }
    if token.len() <= 3 || !token.is_ascii() {
        return token.to_string();
    }

    // plural endings
    if let Some(stem) = token.strip_suffix("ies")
        && stem.len() >= 2
    {
        return format!("{stem}y");
    }
    if token.ends_with("sses") {
        return token[..token.len() - 2].to_string();
    }
    if let Some(stem) = token.strip_suffix("es")
        && (stem.ends_with("sh") || stem.ends_with("ch") || stem.ends_with('x') || stem.ends_with('z'))
    {
        return stem.to_string();
    }
    if token.ends_with('s') && !token.ends_with("ss") && !token.ends_with("us") && !token.ends_with("is") {
        return token[..token.len() - 1].to_string();
    }

    // participle endings
    if let Some(stem) = token.strip_suffix("ing")
        && stem.len() >= 3
    {
        return undouble(stem);
    }
    if let Some(stem) = token.strip_suffix("ed")
        && stem.len() >= 3
    {
        return undouble(stem);
    }

    token.to_string()
}

/// Undo consonant doubling left behind by -ing/-ed stripping
/// ("running" → "runn" → "run"). Double l/s/z stay ("telling" → "tell").
fn undouble(stem: &str) -> String {
    let b = stem.as_bytes();
    let n = b.len();
    if n >= 2 && b[n - 1] == b[n - 2] && !matches!(b[n - 1], b'l' | b's' | b'z') {
        stem[..n - 1].to_string()
    } else {
        stem.to_string()
    }
}
