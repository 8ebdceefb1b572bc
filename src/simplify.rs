//! Canonical string simplification.
//!
//! [`simplify`] is a fixed, strictly ordered chain of rewrites producing a
//! canonical comparable form of a noisy string: typographic punctuation is
//! flattened, case is folded, spelled-out digits become numerals, bracketed
//! annotations and markup are dropped, diacritics and emoji are stripped,
//! and whitespace is collapsed. Each stage assumes the previous stage's
//! output, and re-running the whole chain finds nothing left to change.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::boundary::EMOJI_CLASS;

/// Options for [`simplify_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifyOptions {
    /// Remove only the first bracketed `[...]` annotation instead of all of
    /// them. Historical behavior; leaving later annotations in place makes
    /// the pipeline non-idempotent on multi-annotation inputs.
    pub first_bracket_only: bool,
}

static DIGIT_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(zero|one|two|three|four|five|six|seven|eight|nine|ten)\b")
        .expect("valid regex")
});

static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").expect("valid regex"));

static STRIPPED_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[*:'"♪]"#).expect("valid regex"));

static SENTENCE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,.!?\n\-+]").expect("valid regex"));

static ITALIC_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new("</?i>").expect("valid regex"));

static DOCTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bdoctor\b").expect("valid regex"));

static EMOJI: Lazy<Regex> = Lazy::new(|| Regex::new(EMOJI_CLASS).expect("valid regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

fn digit_word_to_numeral(word: &str) -> &'static str {
    match word {
        "zero" => "0",
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        "ten" => "10",
        _ => unreachable!("alternation covers all digit words"),
    }
}

/// Normalize "smart" typographic punctuation to plain ASCII: the ellipsis
/// character becomes three dots, curly quotes become straight quotes.
#[must_use]
pub fn replace_smart_quotes(s: &str) -> String {
    s.replace('…', "...")
        .replace(['‘', '’'], "'")
        .replace(['“', '”'], "\"")
}

/// Strip combining diacritical marks via canonical decomposition.
///
/// Folds accented Latin letters ("Israël" → "Israel") without corrupting
/// non-Latin scripts, whose letters are not combining marks.
#[must_use]
pub fn remove_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Reduce a string to its canonical comparable form.
///
/// Idempotent: `simplify(&simplify(x)) == simplify(x)`.
///
/// # Example
///
/// ```
/// use textsift::simplify;
///
/// assert_eq!(simplify("M*A*S*H"), "mash");
/// assert_eq!(simplify("  The Doctor… [intro music] Strikes!  "), "the dr strikes");
/// ```
#[must_use]
pub fn simplify(s: &str) -> String {
    simplify_with(s, SimplifyOptions::default())
}

/// [`simplify`] with explicit options.
#[must_use]
pub fn simplify_with(s: &str, options: SimplifyOptions) -> String {
    let s = s.trim();
    let s = replace_smart_quotes(s);
    let s = s.to_lowercase();
    let s = DIGIT_WORDS.replace_all(&s, |caps: &regex::Captures<'_>| {
        digit_word_to_numeral(&caps[1])
    });
    let s = if options.first_bracket_only {
        BRACKETED.replacen(&s, 1, "")
    } else {
        BRACKETED.replace_all(&s, "")
    };
    let s = STRIPPED_PUNCT.replace_all(&s, "");
    let s = SENTENCE_PUNCT.replace_all(&s, " ");
    let s = ITALIC_TAGS.replace_all(&s, "");
    let s = DOCTOR.replace_all(&s, "dr");
    let s = remove_diacritics(&s);
    let s = EMOJI.replace_all(&s, " ");
    let s = WHITESPACE.replace_all(&s, " ");
    s.trim().to_string()
}

static FIRST_THE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bthe\b").expect("valid regex"));

/// Cheap bucketing key for near-duplicate titles: lowercase, drop the
/// first whole-word "the", trim edge spacing and list punctuation.
///
/// The default equivalence function for the aggregation utilities.
#[must_use]
pub fn equivalence(s: &str) -> String {
    let s = s.to_lowercase();
    let s = FIRST_THE.replacen(&s, 1, "");
    s.trim_matches([' ', '.', ',', '-']).to_string()
}

static SENTENCE_SEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s").expect("valid regex"));

/// Split a paragraph on period-plus-whitespace sentence breaks.
#[must_use]
pub fn paragraph_to_sentences(s: &str) -> Vec<String> {
    SENTENCE_SEP.split(s).map(str::to_string).collect()
}

/// English stop words, matched against simplified tokens.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Whether a word is an English stop word, after simplification.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(simplify(word).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_simplify_mash() {
        assert_eq!(simplify("M*A*S*H"), "mash");
    }

    #[test]
    fn test_simplify_smart_quotes_and_ellipsis() {
        assert_eq!(simplify("“Hello…”"), "hello");
        assert_eq!(replace_smart_quotes("‘a’ “b” c…"), "'a' \"b\" c...");
    }

    #[test]
    fn test_simplify_digit_words() {
        assert_eq!(simplify("Ten Little Pigs and One Wolf"), "10 little pigs and 1 wolf");
        // Whole-word only.
        assert_eq!(simplify("someone"), "someone");
    }

    #[test]
    fn test_simplify_brackets() {
        assert_eq!(simplify("[music] la la [applause] la"), "la la la");
        let first_only = simplify_with(
            "[music] la la [applause] la",
            SimplifyOptions {
                first_bracket_only: true,
            },
        );
        assert_eq!(first_only, "la la [applause] la");
    }

    #[test]
    fn test_simplify_italic_tags_and_doctor() {
        assert_eq!(simplify("<i>Doctor Who</i>"), "dr who");
    }

    #[test]
    fn test_simplify_diacritics() {
        assert_eq!(simplify("Israël"), "israel");
        assert_eq!(remove_diacritics("Crème brûlée"), "Creme brulee");
        // Hebrew survives decomposition untouched.
        assert_eq!(remove_diacritics("שלום"), "שלום");
    }

    #[test]
    fn test_simplify_emoji_becomes_separator() {
        assert_eq!(simplify("fire🔥works"), "fire works");
    }

    #[test]
    fn test_simplify_sentence_punctuation() {
        assert_eq!(simplify("one, two. three-four+five!"), "1 2 3 4 5");
    }

    #[test]
    fn test_equivalence() {
        assert_eq!(equivalence("The Matrix"), "matrix");
        assert_eq!(equivalence(" matrix, "), "matrix");
        assert_eq!(equivalence("rethink"), "rethink");
    }

    #[test]
    fn test_paragraph_to_sentences() {
        assert_eq!(
            paragraph_to_sentences("One. Two. Three"),
            vec!["One", "Two", "Three"]
        );
    }

    #[test]
    fn test_is_stop_word() {
        assert!(is_stop_word("The"));
        assert!(is_stop_word("  and "));
        assert!(!is_stop_word("matrix"));
    }

    proptest! {
        #[test]
        fn prop_simplify_idempotent(s in "\\PC{0,80}") {
            let once = simplify(&s);
            prop_assert_eq!(simplify(&once), once.clone());
        }
    }
}
