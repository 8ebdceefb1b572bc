//! Word-list oracle and missing-space repair.
//!
//! Noisy sources (OCRed subtitles, scraped captions) often drop the space
//! between two words. [`fix_missing_space`] repairs the common case with a
//! first-fit dictionary lookup; it is a best-effort heuristic, not a
//! general segmentation algorithm.

use std::collections::HashSet;

/// Immutable set-membership oracle over a word list.
///
/// Lookup is case-sensitive exact match; callers lowercase first. Built
/// once and shared by reference, so unsynchronized concurrent reads are
/// safe.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from any word iterator.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `word` is a known dictionary entry.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// Repair one token: if it is not itself a dictionary entry, return the
/// first split (scanning left to right) where both halves are entries.
/// The right half must keep at least two characters.
fn fix_token(token: &str, lexicon: &Lexicon) -> String {
    if lexicon.contains(token) {
        return token.to_string();
    }
    let char_count = token.chars().count();
    for (nth, (idx, _)) in token.char_indices().enumerate().skip(1) {
        if nth > char_count.saturating_sub(2) {
            break;
        }
        let (head, tail) = token.split_at(idx);
        if lexicon.contains(head) && lexicon.contains(tail) {
            return format!("{head} {tail}");
        }
    }
    token.to_string()
}

/// Repair accidentally concatenated words in `text`.
///
/// Each whitespace-delimited token is repaired independently and the
/// tokens are rejoined with single spaces. No backtracking across tokens,
/// no scoring beyond first fit.
///
/// # Example
///
/// ```
/// use textsift::{fix_missing_space, Lexicon};
///
/// let lexicon = Lexicon::from_words(["snow", "white", "the", "seven"]);
/// assert_eq!(fix_missing_space("snow white theseven", &lexicon), "snow white the seven");
/// ```
#[must_use]
pub fn fix_missing_space(text: &str, lexicon: &Lexicon) -> String {
    text.split_whitespace()
        .map(|token| fix_token(token, lexicon))
        .collect::<Vec<_>>()
        .join(" ")
}
