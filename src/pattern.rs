//! Composable regular-expression values.
//!
//! A [`Pattern`] is an immutable `(source, flag set)` pair. Combinators
//! never mutate their operands; each returns a new value, and composing two
//! patterns unions their flag sets. Compilation against the host engine is
//! deferred until a matching operation, so construction is infallible and a
//! malformed source surfaces as [`Error::Pattern`](crate::Error::Pattern)
//! at first use.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A half-open `[start, end)` byte-offset range into an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl Span {
    /// Create a span from start/end byte offsets.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is zero-length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Independent boolean pattern modes.
///
/// Stored as a set, not a string, so adding a flag twice is a no-op and the
/// union of two flag sets is commutative, idempotent, and deterministically
/// ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Flag {
    /// Letters match both cases (`(?i)`).
    CaseInsensitive,
    /// Find-all mode. Purely a marker: span finding always scans the whole
    /// input, it never changes how a source compiles.
    Global,
    /// `^`/`$` match at line boundaries (`(?m)`).
    MultiLine,
    /// `.` also matches `\n` (`(?s)`).
    DotMatchesNewline,
}

impl Flag {
    /// The inline-flag character understood by the host engine, if any.
    fn inline(self) -> Option<char> {
        match self {
            Flag::CaseInsensitive => Some('i'),
            Flag::MultiLine => Some('m'),
            Flag::DotMatchesNewline => Some('s'),
            Flag::Global => None,
        }
    }
}

/// An immutable, composable regular-expression value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    source: String,
    flags: BTreeSet<Flag>,
}

/// Wrap a source in a non-capturing group unless it is already fully
/// parenthesized or bracketed (structural check only: the source both
/// starts and ends with the same bracket kind).
fn bracket_if_needed(source: &str) -> String {
    if (source.starts_with('(') && source.ends_with(')'))
        || (source.starts_with('[') && source.ends_with(']'))
    {
        source.to_string()
    } else {
        format!("(?:{source})")
    }
}

impl Pattern {
    /// Create a pattern from a raw source, with no flags.
    ///
    /// The source is not validated here; an invalid source fails at the
    /// first matching operation.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: BTreeSet::new(),
        }
    }

    /// The pattern source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The pattern's flag set, in deterministic order.
    #[must_use]
    pub fn flags(&self) -> &BTreeSet<Flag> {
        &self.flags
    }

    /// Whether a flag is present.
    #[must_use]
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    /// Return the same pattern with `flag` added. Idempotent.
    #[must_use]
    pub fn with_flag(&self, flag: Flag) -> Self {
        let mut flags = self.flags.clone();
        flags.insert(flag);
        Self {
            source: self.source.clone(),
            flags,
        }
    }

    /// Return the same pattern with case-insensitive matching.
    #[must_use]
    pub fn case_insensitive(&self) -> Self {
        self.with_flag(Flag::CaseInsensitive)
    }

    /// Return the same pattern marked for find-all mode.
    #[must_use]
    pub fn global(&self) -> Self {
        self.with_flag(Flag::Global)
    }

    /// Concatenate two patterns: sources joined as-is, flags unioned.
    ///
    /// No grouping is inserted; pre-wrap an operand that contains top-level
    /// alternation to avoid precedence surprises.
    #[must_use]
    pub fn concat(&self, other: &Pattern) -> Self {
        Self {
            source: format!("{}{}", self.source, other.source),
            flags: self.flags.union(&other.flags).copied().collect(),
        }
    }

    /// Alternation: `(?:A|B)` with each operand grouped if needed, flags
    /// unioned.
    #[must_use]
    pub fn or(&self, other: &Pattern) -> Self {
        Self {
            source: format!(
                "(?:{}|{})",
                bracket_if_needed(&self.source),
                bracket_if_needed(&other.source)
            ),
            flags: self.flags.union(&other.flags).copied().collect(),
        }
    }

    /// Zero-or-one quantifier.
    #[must_use]
    pub fn optional(&self) -> Self {
        self.quantified("?")
    }

    /// Zero-or-more quantifier.
    #[must_use]
    pub fn zero_or_more(&self) -> Self {
        self.quantified("*")
    }

    /// One-or-more quantifier.
    #[must_use]
    pub fn one_or_more(&self) -> Self {
        self.quantified("+")
    }

    /// Bounded repetition: between `min` and `max` occurrences.
    #[must_use]
    pub fn times(&self, min: usize, max: usize) -> Self {
        self.quantified(&format!("{{{min},{max}}}"))
    }

    fn quantified(&self, quantifier: &str) -> Self {
        Self {
            source: format!("{}{}", bracket_if_needed(&self.source), quantifier),
            flags: self.flags.clone(),
        }
    }

    /// Anchor the pattern to the entire string: `^…$`. Flags unchanged.
    #[must_use]
    pub fn anchor_entire(&self) -> Self {
        Self {
            source: format!("^{}$", self.source),
            flags: self.flags.clone(),
        }
    }

    /// Wrap the pattern in a capturing group.
    #[must_use]
    pub fn capture_group(&self) -> Self {
        Self {
            source: format!("({})", self.source),
            flags: self.flags.clone(),
        }
    }

    /// Zero-width assertion that the pattern does not immediately precede
    /// the current position: `(?<!…)`.
    #[must_use]
    pub fn negative_look_behind(&self) -> Self {
        Self {
            source: format!("(?<!{})", self.source),
            flags: self.flags.clone(),
        }
    }

    /// Compile against the host engine, translating flags to an inline
    /// prefix. Syntax errors surface here and propagate.
    pub fn compile(&self) -> Result<fancy_regex::Regex> {
        let inline: String = self.flags.iter().filter_map(|f| f.inline()).collect();
        let source = if inline.is_empty() {
            self.source.clone()
        } else {
            format!("(?{inline}){}", self.source)
        };
        fancy_regex::Regex::new(&source).map_err(|e| Error::pattern(e.to_string()))
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> Result<bool> {
        let re = self.compile()?;
        re.is_match(text).map_err(|e| Error::match_failed(e.to_string()))
    }

    /// All non-overlapping match spans in `text`, left to right.
    ///
    /// Always scans the whole input regardless of the [`Flag::Global`]
    /// marker, without mutating the pattern. After each match the scan
    /// resumes at its end; a zero-length match advances by one character so
    /// iteration terminates on any finite input.
    pub fn find_all_spans(&self, text: &str) -> Result<Vec<Span>> {
        let re = self.compile()?;
        let mut spans = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let found = re
                .find_from_pos(text, pos)
                .map_err(|e| Error::match_failed(e.to_string()))?;
            let Some(m) = found else { break };
            spans.push(Span::new(m.start(), m.end()));
            if m.end() > m.start() {
                pos = m.end();
            } else {
                // Zero-length match: step over the next character.
                match text[m.end()..].chars().next() {
                    Some(c) => pos = m.end() + c.len_utf8(),
                    None => break,
                }
            }
        }
        Ok(spans)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inline: String = self.flags.iter().filter_map(|flag| flag.inline()).collect();
        write!(f, "/{}/{}", self.source, inline)
    }
}

/// A pattern matching the literal string `s`, with every regex
/// metacharacter escaped.
#[must_use]
pub fn escape_literal(s: &str) -> Pattern {
    let mut source = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(
            c,
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
        ) {
            source.push('\\');
        }
        source.push(c);
    }
    Pattern::new(source)
}
