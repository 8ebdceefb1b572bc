//! Structural extraction utilities for scraped and transcribed text.
//!
//! Pulls titles, quotes, handles, URLs, and phone numbers out of free
//! text: capitalized-run extraction for titles embedded in longer
//! captions, quoted-substring extraction, the text around a known marker
//! pattern, n-gram enumeration, and contact-info scanning.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::pattern::Pattern;
use crate::simplify::simplify;

/// Connective stop words that may continue a capitalized run without being
/// capitalized themselves.
const PRE_STOP_WORDS: &[&str] = &["the", "with", "of", "and", "in"];

/// Accumulate the leading run of title-like words: each word either
/// continues an existing run as a connective stop word, or starts with a
/// digit or uppercase letter and is not a possessive. The run is then
/// trimmed of stop words at the edges.
fn capitalized_sequence<'a>(
    stop_words_left: &[&str],
    stop_words_right: &[&str],
    words: &[&'a str],
) -> Vec<&'a str> {
    let mut sequence: Vec<&str> = Vec::new();
    for &word in words {
        let continues_run = !word.contains('"')
            && !sequence.is_empty()
            && (stop_words_left.contains(&word) || stop_words_right.contains(&word));
        let title_like = word
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
            && !word.ends_with("'s");
        if continues_run || title_like {
            sequence.push(word);
        } else {
            break;
        }
    }
    let mut start = 0;
    while start < sequence.len() {
        if !stop_words_right.contains(&simplify(sequence[start]).as_str()) {
            break;
        }
        start += 1;
    }
    let mut end = sequence.len();
    while end > start {
        if !stop_words_left.contains(&simplify(sequence[end - 1]).as_str()) {
            break;
        }
        end -= 1;
    }
    sequence[start..end].to_vec()
}

/// The capitalized (title-like) run at the start of `text`.
///
/// # Example
///
/// ```
/// use textsift::capitalized_prefix;
///
/// let caption = "Jerry Maguire with a subscription on Peacock, rent on Amazon Prime Video.";
/// assert_eq!(capitalized_prefix(caption), "Jerry Maguire");
/// ```
#[must_use]
pub fn capitalized_prefix(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    capitalized_sequence(PRE_STOP_WORDS, &[], &words).join(" ")
}

/// The capitalized (title-like) run at the end of `text`.
#[must_use]
pub fn capitalized_suffix(text: &str) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    words.reverse();
    let mut sequence = capitalized_sequence(&[], PRE_STOP_WORDS, &words);
    sequence.reverse();
    sequence.join(" ")
}

static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("valid regex"));

/// The interior of every non-overlapping double-quoted substring, in
/// left-to-right order.
#[must_use]
pub fn quoted_texts(text: &str) -> Vec<String> {
    QUOTED
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// For every match of `pattern`, the text before the match start.
///
/// Useful for pulling the segment preceding a known trailing marker, e.g.
/// everything before " Clip" in a scraped video title.
pub fn prefixes_with_suffix(pattern: &Pattern, input: &str) -> Result<Vec<String>> {
    Ok(pattern
        .find_all_spans(input)?
        .into_iter()
        .map(|span| input[..span.start].to_string())
        .collect())
}

/// For every match of `pattern`, the text after the match end.
pub fn suffixes_with_prefix(pattern: &Pattern, input: &str) -> Result<Vec<String>> {
    Ok(pattern
        .find_all_spans(input)?
        .into_iter()
        .map(|span| input[span.end..].to_string())
        .collect())
}

/// Every contiguous word window of at least `n` words, ordered by start
/// index and then by increasing length.
///
/// Enumerates a quadratic number of windows; intended for short inputs.
#[must_use]
pub fn ngrams_of_at_least_n_words(n: usize, text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split(' ').collect();
    if n == 0 || words.len() < n {
        return Vec::new();
    }
    let mut ngrams = Vec::new();
    for i in 0..=(words.len() - n) {
        for j in (i + n)..=words.len() {
            ngrams.push(words[i..j].join(" "));
        }
    }
    ngrams
}

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").expect("valid regex")
});

static IMAGE_FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\S+\.(?:jpg|png|jpeg)\b").expect("valid regex"));

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?://|ftp://)?[\w.-]+\.[a-z]{2,}(?:/[\w\-._~:/?#\[\]@!$&'()*+,;=%]*)?\b")
        .expect("valid regex")
});

/// All URL-like substrings of `text`, after e-mail addresses and bare
/// image filenames are stripped so they are not mistaken for URLs.
#[must_use]
pub fn urls_in_text(text: &str) -> Vec<String> {
    let without_emails = EMAIL.replace_all(text, "");
    let without_images = IMAGE_FILENAME.replace_all(&without_emails, "");
    URL.find_iter(&without_images)
        .map(|m| m.as_str().to_string())
        .collect()
}

static TELEGRAM_AT_HANDLE: Lazy<fancy_regex::Regex> = Lazy::new(|| {
    fancy_regex::Regex::new(r"\B@((?=\w{5,32}\b)[a-zA-Z0-9]+(?:_[a-zA-Z0-9]+)*)")
        .expect("valid regex")
});

static TELEGRAM_LINK_HANDLE: Lazy<fancy_regex::Regex> =
    Lazy::new(|| fancy_regex::Regex::new(r"t\.me/(\w{4,})").expect("valid regex"));

/// The first Telegram handle in `text`, by either `@handle` or
/// `t.me/handle` syntax.
#[must_use]
pub fn telegram_handle_in_text(text: &str) -> Option<String> {
    for pattern in [&TELEGRAM_AT_HANDLE, &TELEGRAM_LINK_HANDLE] {
        if let Ok(Some(caps)) = pattern.captures(text) {
            if let Some(handle) = caps.get(1) {
                return Some(handle.as_str().to_string());
            }
        }
    }
    None
}

/// All lines of `text` that parse as valid phone numbers for `country`,
/// canonicalized to E.164 digits without the leading `+`.
#[must_use]
pub fn phones_in_text(country: phonenumber::country::Id, text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| phonenumber::parse(Some(country), line.trim()).ok())
        .filter(phonenumber::is_valid)
        .map(|number| {
            let formatted = number.format().mode(phonenumber::Mode::E164).to_string();
            formatted.trim_start_matches('+').to_string()
        })
        .collect()
}
