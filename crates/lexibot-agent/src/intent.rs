//! Conversational intent detection.
//!
//! Keyword matching over small fixed word lists, checked in priority order
//! greeting → farewell → thanks. Runs on the raw input, independent of the
//! vector path, with no external resources — this path has no fallback
//! because it needs none.

use std::collections::HashSet;

use lexibot_core::types::Intent;

/// Greeting patterns.
const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Farewell patterns. `exit`/`quit` are usually consumed by the read loop
/// as sentinels before intent detection runs, but piped input still gets a
/// farewell for them.
const FAREWELLS: &[&str] = &["bye", "goodbye", "see you", "farewell", "exit", "quit"];

/// Thanks patterns.
const THANKS: &[&str] = &["thanks", "thank you", "thx", "thank", "appreciate"];

/// Classify raw input into a conversational intent.
///
/// Single-word patterns match on whole words only ("hi" never fires inside
/// "high"); multi-word phrases match when all their words are present or
/// the phrase appears verbatim.
pub fn detect_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();
    let lower = lower.trim();
    if lower.is_empty() {
        return Intent::None;
    }

    let words: HashSet<&str> = lower
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|w| !w.is_empty())
        .collect();

    if matches_any(GREETINGS, &words, lower) {
        return Intent::Greeting;
    }
    if matches_any(FAREWELLS, &words, lower) {
        return Intent::Farewell;
    }
    if matches_any(THANKS, &words, lower) {
        return Intent::Thanks;
    }
    Intent::None
}

fn matches_any(patterns: &[&str], words: &HashSet<&str>, text: &str) -> bool {
    patterns.iter().any(|p| {
        if p.contains(' ') {
            p.split(' ').all(|w| words.contains(w)) || text.contains(p)
        } else {
            words.contains(p)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings() {
        assert_eq!(detect_intent("hello"), Intent::Greeting);
        assert_eq!(detect_intent("Hey there!"), Intent::Greeting);
        assert_eq!(detect_intent("good morning everyone"), Intent::Greeting);
    }

    #[test]
    fn test_farewells() {
        assert_eq!(detect_intent("bye"), Intent::Farewell);
        assert_eq!(detect_intent("ok goodbye now"), Intent::Farewell);
        assert_eq!(detect_intent("see you later"), Intent::Farewell);
    }

    #[test]
    fn test_thanks() {
        assert_eq!(detect_intent("thanks a lot"), Intent::Thanks);
        assert_eq!(detect_intent("Thank you!"), Intent::Thanks);
    }

    #[test]
    fn test_word_boundaries() {
        // "hi" inside "high" must not fire
        assert_eq!(detect_intent("high noon today"), Intent::None);
        assert_eq!(detect_intent("the highway is busy"), Intent::None);
        // "bye" inside another word must not fire either
        assert_eq!(detect_intent("goodbyeish"), Intent::None);
    }

    #[test]
    fn test_priority_order() {
        // greeting wins over everything
        assert_eq!(detect_intent("hello and thanks"), Intent::Greeting);
        // farewell wins over thanks
        assert_eq!(detect_intent("thanks, bye"), Intent::Farewell);
    }

    #[test]
    fn test_none_cases() {
        assert_eq!(detect_intent(""), Intent::None);
        assert_eq!(detect_intent("   "), Intent::None);
        assert_eq!(detect_intent("what is rust"), Intent::None);
    }
}
