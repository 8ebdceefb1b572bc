//! Whole-word boundary handling for mixed-script text.
//!
//! The host engine's `\b` assertion only understands ASCII-ish word
//! characters, so keyword and speaker matching over mixed Latin + Hebrew
//! text uses a custom boundary set instead: fixed punctuation/whitespace,
//! string edges, Hebrew single-letter prepositions (only when not glued to
//! a preceding letter), emoji, and pluralization suffixes. It is defined
//! once here and reused by every whole-word consumer.

use once_cell::sync::Lazy;

use crate::pattern::{escape_literal, Pattern};

/// Character-class source covering emoji and a broad band of Unicode
/// symbol blocks.
pub(crate) const EMOJI_CLASS: &str =
    r"(\x{A9}|\x{AE}|[\x{2000}-\x{3300}]|[\x{1F000}-\x{1FAFF}])";

/// Hebrew single-letter prepositions that may be prefixed to a word:
/// ה (the), ו (and), ל (to), ב (in).
const HEBREW_PREPOSITIONS: [char; 4] = ['ה', 'ו', 'ל', 'ב'];

fn hebrew_prepositional_letters() -> Pattern {
    HEBREW_PREPOSITIONS
        .iter()
        .map(|&letter| {
            // Only a boundary when not preceded by another Hebrew or Latin
            // letter, so a preposition-shaped letter mid-word doesn't count.
            Pattern::new("[א-תa-zA-Z]")
                .negative_look_behind()
                .concat(&escape_literal(&letter.to_string()))
        })
        .reduce(|a, b| a.or(&b))
        .expect("non-empty preposition list")
}

/// Pluralization suffixes: English `s`, Hebrew `ים`/`ות`.
fn plurality() -> Pattern {
    Pattern::new("s|ים|ות").case_insensitive()
}

static BOUNDARY: Lazy<Pattern> = Lazy::new(|| {
    [
        Pattern::new(r"[_@.\-\s:/\[\]?&%$#=*,!()]"),
        Pattern::new("^"),
        Pattern::new("$"),
        hebrew_prepositional_letters(),
        Pattern::new(EMOJI_CLASS),
        plurality(),
    ]
    .into_iter()
    .reduce(|a, b| a.or(&b))
    .expect("non-empty boundary alternatives")
});

/// The multi-script word-boundary pattern.
#[must_use]
pub fn boundary() -> &'static Pattern {
    &BOUNDARY
}

/// Require `pattern` to be bounded on both sides by the multi-script
/// boundary set (or a string edge). Keeps the operand's flags.
#[must_use]
pub fn whole_word(pattern: &Pattern) -> Pattern {
    let mut result = Pattern::new(format!(
        "(^|{b}){src}($|{b})",
        b = BOUNDARY.source(),
        src = pattern.source()
    ));
    for &flag in pattern.flags() {
        result = result.with_flag(flag);
    }
    result
}
