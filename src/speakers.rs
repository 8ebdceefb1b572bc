//! Speaker-label stripping for dialogue transcripts.
//!
//! Subtitle and transcript scrapes interleave dialogue with "Speaker :"
//! labels and trailing "― Author" attributions. The label shape (optional
//! hyphen, optional Mr./Ms./Dr. prefix, a few capitalized tokens, a colon)
//! is assembled from the [`Pattern`] combinators, terminated by the
//! multi-script boundary so labels are recognized in mixed-script text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::boundary::boundary;
use crate::pattern::Pattern;

fn dotted_title(words: &[&str]) -> Pattern {
    words
        .iter()
        .map(|word| Pattern::new(format!(r"{word}\.?")).case_insensitive())
        .reduce(|a, b| a.or(&b))
        .expect("non-empty title list")
}

static NAME_PREFIX: Lazy<Pattern> = Lazy::new(|| dotted_title(&["ms", "mrs", "mr", "dr", "prof"]));

static NAME_SUFFIX: Lazy<Pattern> = Lazy::new(|| dotted_title(&["sr", "jr"]));

/// Zero to four capitalized, optionally apostrophe/dot-decorated tokens,
/// then a bare word or a name suffix.
static PERSON_NAME: Lazy<Pattern> = Lazy::new(|| {
    [
        NAME_PREFIX.concat(&Pattern::new(r"\s")).optional(),
        Pattern::new(r"'?[A-Z][\w-]*\.?'?\s").times(0, 4),
        Pattern::new(r"[\w-]+").or(&NAME_SUFFIX.concat(&Pattern::new(r"\s"))),
    ]
    .into_iter()
    .reduce(|a, b| a.concat(&b))
    .expect("non-empty name parts")
});

static HYPHEN: Lazy<Pattern> = Lazy::new(|| Pattern::new("[―-]"));

/// A whole "Speaker :" label, terminated by the multi-script boundary.
static SPEAKER: Lazy<Pattern> = Lazy::new(|| {
    [
        HYPHEN.optional(),
        PERSON_NAME.clone(),
        Pattern::new(r"\s?:"),
        boundary().clone(),
    ]
    .into_iter()
    .reduce(|a, b| a.concat(&b))
    .expect("non-empty speaker parts")
});

static SPEAKER_ENTIRE: Lazy<fancy_regex::Regex> =
    Lazy::new(|| SPEAKER.anchor_entire().compile().expect("valid regex"));

/// A dangling "― Name" attribution at the very end of the string.
static SPEAKER_IN_END: Lazy<fancy_regex::Regex> = Lazy::new(|| {
    [
        HYPHEN.clone(),
        Pattern::new(r"\s*"),
        PERSON_NAME.clone(),
        Pattern::new("$"),
    ]
    .into_iter()
    .reduce(|a, b| a.concat(&b))
    .expect("non-empty parts")
    .compile()
    .expect("valid regex")
});

/// Sentence separator: `, ! . ? :` followed by whitespace, except after
/// `word.word.` runs and after abbreviations like "Mr.".
static SENTENCE_SPLIT: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(r"(?<!\w\.\w.)(?<![A-Z][a-z]\.)(?<=[,!.?:])\s"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Split a transcript into sentences without breaking on abbreviation
/// periods.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let spans = SENTENCE_SPLIT
        .find_all_spans(text)
        .expect("valid regex");
    let mut sentences = Vec::new();
    let mut pos = 0;
    for span in spans {
        sentences.push(text[pos..span.start].to_string());
        pos = span.end;
    }
    sentences.push(text[pos..].to_string());
    sentences
}

/// Remove speaker labels from a dialogue transcript, keeping only the
/// dialogue itself.
///
/// Sentences that consist entirely of a speaker label are dropped, the
/// rest are rejoined with single spaces, and a trailing dangling
/// attribution ("― Hunter S. Thompson") is stripped.
///
/// # Example
///
/// ```
/// use textsift::clean_speakers;
///
/// assert_eq!(
///     clean_speakers("Ant-Man : It's your conscience. We don't talk a lot these days."),
///     "It's your conscience. We don't talk a lot these days."
/// );
/// ```
#[must_use]
pub fn clean_speakers(text: &str) -> String {
    let kept: Vec<String> = split_sentences(text)
        .into_iter()
        .filter(|sentence| !SPEAKER_ENTIRE.is_match(sentence.trim()).unwrap_or(false))
        .collect();
    let joined = kept.join(" ");
    let collapsed = WHITESPACE.replace_all(&joined, " ");
    let stripped = SPEAKER_IN_END.replace(&collapsed, "");
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_basic() {
        assert_eq!(
            split_sentences("One. Two! Three? Four"),
            vec!["One.", "Two!", "Three?", "Four"]
        );
    }

    #[test]
    fn test_split_sentences_keeps_abbreviations() {
        assert_eq!(
            split_sentences("Mr. Smith went home. He slept."),
            vec!["Mr. Smith went home.", "He slept."]
        );
    }

    #[test]
    fn test_clean_speakers_dialogue() {
        assert_eq!(
            clean_speakers(
                "Ant-Man :  Oh, you're going to have to take this to the shop. \
                 Iron Man : Who's speaking? Ant-Man : It's your conscience. \
                 We don't talk a lot these days."
            ),
            "Oh, you're going to have to take this to the shop. Who's speaking? \
             It's your conscience. We don't talk a lot these days."
        );
    }

    #[test]
    fn test_clean_speakers_with_name_prefix() {
        assert_eq!(
            clean_speakers("Dr. Strange : The bill comes due."),
            "The bill comes due."
        );
    }

    #[test]
    fn test_clean_speakers_trailing_attribution() {
        assert_eq!(
            clean_speakers("He seemed oblivious. ― Hunter S. Thompson"),
            "He seemed oblivious."
        );
    }

    #[test]
    fn test_clean_speakers_no_labels() {
        assert_eq!(clean_speakers("Just a line."), "Just a line.");
    }
}
