//! Keyword matching and trigger classification.
//!
//! Keywords match whole words only, case- and diacritic-insensitively:
//! both keyword and text go through [`simplify`] and the match is bounded
//! by the multi-script boundary set, so "talk" matches "talks" and a
//! Hebrew keyword matches behind a prepositional prefix letter.

use serde::{Deserialize, Serialize};

use crate::boundary::whole_word;
use crate::pattern::escape_literal;
use crate::simplify::simplify;

/// Whether any keyword whole-word-matches anywhere in `text`.
#[must_use]
pub fn some_keyword_matches<S: AsRef<str>>(keywords: &[S], text: &str) -> bool {
    let simple_text = simplify(text);
    keywords.iter().any(|keyword| {
        let pattern = whole_word(&escape_literal(&simplify(keyword.as_ref())));
        pattern.is_match(&simple_text).unwrap_or(false)
    })
}

/// Required and disqualifying keyword sets for one classification label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// At least one must whole-word-match.
    pub keywords: Vec<String>,
    /// None may match.
    pub anti_keywords: Vec<String>,
}

impl KeywordRule {
    /// Rule matching any of `keywords`, with no anti-keywords.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            anti_keywords: Vec::new(),
        }
    }

    /// Add disqualifying anti-keywords.
    #[must_use]
    pub fn with_anti_keywords<I, S>(mut self, anti_keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anti_keywords = anti_keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the rule triggers on `text`: at least one keyword matches
    /// and no anti-keyword does.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        some_keyword_matches(&self.keywords, text)
            && !some_keyword_matches(&self.anti_keywords, text)
    }
}

/// Classify `text` against an ordered list of labeled rules.
///
/// Returns the labels of every rule that triggers, in rule order; a text
/// may match zero, one, or several labels.
#[must_use]
pub fn trigger_by_text<T: Clone>(rules: &[(T, KeywordRule)], text: &str) -> Vec<T> {
    rules
        .iter()
        .filter(|(_, rule)| rule.matches(text))
        .map(|(label, _)| label.clone())
        .collect()
}
