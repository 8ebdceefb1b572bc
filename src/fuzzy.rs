//! Bounded fuzzy substring search and approximate semantic equality.
//!
//! [`fuzzy_search`] is a semi-global Levenshtein scan: it finds windows of
//! the text whose edit distance to the query is within a caller-supplied
//! bound. [`approximate_semantic_equality`] layers the canonicalization
//! pipeline on top of it to decide whether two strings denote the same
//! text despite surface noise.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::{fix_missing_space, Lexicon};
use crate::pattern::Span;
use crate::simplify::simplify;

/// All spans of `text` whose content is within Levenshtein distance
/// `max_distance` of `query`, as byte-offset spans in left-to-right order.
///
/// Distances are measured over characters. Overlapping candidate endpoints
/// are coalesced: within each maximal run of qualifying end positions the
/// lowest-distance window is reported. An empty query matches trivially
/// with a single empty span.
#[must_use]
pub fn fuzzy_search(query: &str, text: &str, max_distance: usize) -> Vec<Span> {
    let q: Vec<char> = query.chars().collect();
    let t: Vec<(usize, char)> = text.char_indices().collect();
    let n = t.len();
    let byte_at = |char_idx: usize| -> usize {
        if char_idx == n {
            text.len()
        } else {
            t[char_idx].0
        }
    };

    // Row-by-row DP over query characters. dist[j] is the best distance of
    // the query prefix against a text window ending at character j;
    // start[j] tracks where that window begins. Any start position is free
    // (semi-global alignment).
    let mut dist: Vec<usize> = vec![0; n + 1];
    let mut start: Vec<usize> = (0..=n).collect();

    for (i, &qc) in q.iter().enumerate() {
        let mut next_dist = vec![0; n + 1];
        let mut next_start = vec![0; n + 1];
        next_dist[0] = i + 1;
        for j in 1..=n {
            let sub_cost = usize::from(t[j - 1].1 != qc);
            let mut best = dist[j - 1] + sub_cost;
            let mut best_start = start[j - 1];
            if dist[j] + 1 < best {
                best = dist[j] + 1;
                best_start = start[j];
            }
            if next_dist[j - 1] + 1 < best {
                best = next_dist[j - 1] + 1;
                best_start = next_start[j - 1];
            }
            next_dist[j] = best;
            next_start[j] = best_start;
        }
        dist = next_dist;
        start = next_start;
    }

    let mut spans = Vec::new();
    let mut run: Option<usize> = None; // best end position of the current run
    for j in 0..=n {
        if dist[j] <= max_distance {
            run = match run {
                Some(best) if dist[best] <= dist[j] => Some(best),
                _ => Some(j),
            };
        } else if let Some(best) = run.take() {
            spans.push(Span::new(byte_at(start[best]), byte_at(best)));
        }
    }
    if let Some(best) = run {
        spans.push(Span::new(byte_at(start[best]), byte_at(best)));
    }
    spans
}

static THE_WITH_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bthe\b\s*").expect("valid regex"));

/// Canonical comparable form for semantic-equality checks: lowercase,
/// missing-space repair, simplification, whole-word "the" removal.
fn remove_non_semantic_differences(s: &str, lexicon: &Lexicon) -> String {
    let s = s.to_lowercase();
    let s = fix_missing_space(&s, lexicon);
    let s = simplify(&s);
    THE_WITH_SPACING.replace_all(&s, "").to_string()
}

/// Whether two strings plausibly denote the same text despite surface
/// noise (typos, missing spaces, articles, punctuation).
///
/// The longer original's canonical form is searched for approximately
/// inside the shorter original's canonical form, tolerating an edit
/// distance of up to 20% of the shorter canonical length. Role assignment
/// depends only on the original lengths, so the check is symmetric in its
/// arguments.
///
/// # Example
///
/// ```
/// use textsift::{approximate_semantic_equality, Lexicon};
///
/// let lexicon = Lexicon::default();
/// assert!(approximate_semantic_equality("judge dred", "judge dredd", &lexicon));
/// assert!(!approximate_semantic_equality("a name with more words", "a name", &lexicon));
/// ```
#[must_use]
pub fn approximate_semantic_equality(x: &str, y: &str, lexicon: &Lexicon) -> bool {
    let x_simple = remove_non_semantic_differences(x, lexicon);
    let y_simple = remove_non_semantic_differences(y, lexicon);
    let x_longer = x.chars().count() > y.chars().count();
    let x_shorter = x.chars().count() < y.chars().count();
    let query = if x_longer { &x_simple } else { &y_simple };
    let haystack = if x_shorter { &x_simple } else { &y_simple };
    let threshold = (0.2 * haystack.chars().count() as f64).round() as usize;
    !fuzzy_search(query, haystack, threshold).is_empty()
}
