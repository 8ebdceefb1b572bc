//! # textsift
//!
//! Text normalization and lightweight information extraction for noisy,
//! human-authored strings: subtitles, chat transcripts, scraped captions,
//! social-media text. A preprocessing layer for semantic comparison and
//! keyword triggering, not an NLP model.
//!
//! - **Pattern algebra**: composable, immutable regex values with flag-set
//!   union semantics ([`Pattern`])
//! - **Simplification**: a fixed canonicalization pipeline ([`simplify`])
//! - **Fuzzy equality**: edit-distance-bounded containment
//!   ([`approximate_semantic_equality`])
//! - **Extraction**: titles, quotes, speaker labels, n-grams, handles,
//!   URLs, phone numbers
//! - **Keyword triggers**: whole-word matching tuned for mixed Latin +
//!   Hebrew text ([`some_keyword_matches`], [`trigger_by_text`])
//!
//! All operations are pure, synchronous functions over value types; there
//! is no shared mutable state, so everything is safe to call concurrently.

#![warn(missing_docs)]

pub mod aggregate;
pub mod boundary;
pub mod error;
pub mod extract;
pub mod fuzzy;
pub mod keywords;
pub mod lexicon;
pub mod pattern;
pub mod simplify;
pub mod speakers;

pub use error::{Error, Result};

pub use aggregate::{appear_more_than, majority, top_by_count};
pub use boundary::{boundary, whole_word};
pub use extract::{
    capitalized_prefix, capitalized_suffix, ngrams_of_at_least_n_words, phones_in_text,
    prefixes_with_suffix, quoted_texts, suffixes_with_prefix, telegram_handle_in_text,
    urls_in_text,
};
pub use fuzzy::{approximate_semantic_equality, fuzzy_search};
pub use keywords::{some_keyword_matches, trigger_by_text, KeywordRule};
pub use lexicon::{fix_missing_space, Lexicon};
pub use pattern::{escape_literal, Flag, Pattern, Span};
pub use simplify::{
    equivalence, is_stop_word, paragraph_to_sentences, remove_diacritics, replace_smart_quotes,
    simplify, simplify_with, SimplifyOptions,
};
pub use speakers::{clean_speakers, split_sentences};

/// Country identifiers accepted by [`phones_in_text`].
pub use phonenumber::country::Id as Country;
