//! End-to-end scenarios over real scraped-caption and transcript inputs.
//!
//! Tests cover:
//! - title extraction from streaming-availability captions and video titles
//! - speaker stripping on multi-speaker transcripts
//! - approximate semantic equality on noisy title pairs
//! - pattern-combinator laws (flag union, alternation, termination)

use textsift::{
    approximate_semantic_equality, capitalized_prefix, capitalized_suffix, clean_speakers,
    escape_literal, ngrams_of_at_least_n_words, prefixes_with_suffix, quoted_texts, simplify,
    some_keyword_matches, suffixes_with_prefix, Flag, Lexicon, Pattern,
};

use proptest::prelude::*;

// =============================================================================
// Title extraction
// =============================================================================

#[test]
fn test_capitalized_prefix_streaming_caption() {
    assert_eq!(
        capitalized_prefix(
            "Jerry Maguire with a subscription on Peacock, rent on Amazon Prime Video, Vudu, \
             Apple TV, or buy on Amazon Prime Video, Vudu, Apple TV."
        ),
        "Jerry Maguire"
    );
}

#[test]
fn test_capitalized_suffix_video_title() {
    assert_eq!(
        capitalized_suffix(
            "Uncle Ben : Remember, with great power comes great responsibility (scene) - Spider-Man"
        ),
        "Spider-Man"
    );
}

#[test]
fn test_prefixes_with_suffix_clip_marker() {
    let clip = Pattern::new(r"\s+clip").case_insensitive().global();
    assert!(prefixes_with_suffix(&clip, "hello").unwrap().is_empty());
    assert_eq!(
        prefixes_with_suffix(
            &clip,
            "APOCALYPSE NOW Clip - Smell of Napalm in the Morning (1979) Robert Duvall JoBlo \
             Movie Clips 5.77M subscribers"
        )
        .unwrap(),
        vec![
            "APOCALYPSE NOW",
            "APOCALYPSE NOW Clip - Smell of Napalm in the Morning (1979) Robert Duvall JoBlo Movie",
        ]
    );
}

#[test]
fn test_prefixes_with_suffix_year_marker() {
    let year = Pattern::new(r"\s+\(\d\d\d\d\)").case_insensitive().global();
    assert_eq!(
        prefixes_with_suffix(
            &year,
            "Uncle Ben : Remember, with great power comes great responsibility (scene) - \
             Spider-Man (2002) Movie CLIP [1080p HD]TM & © Sony (2002)Fair use."
        )
        .unwrap(),
        vec![
            "Uncle Ben : Remember, with great power comes great responsibility (scene) - Spider-Man",
            "Uncle Ben : Remember, with great power comes great responsibility (scene) - \
             Spider-Man (2002) Movie CLIP [1080p HD]TM & © Sony",
        ]
    );
}

#[test]
fn test_suffixes_with_prefix_from_marker() {
    let from = Pattern::new(r"from\s+").case_insensitive().global();
    assert_eq!(
        suffixes_with_prefix(&from, "from the matrix").unwrap(),
        vec!["the matrix"]
    );
}

#[test]
fn test_quoted_texts_movie_review() {
    assert_eq!(
        quoted_texts(
            "the movie \"the matrix\" is pretty good i remember the quote \"i know kung fu\""
        ),
        vec!["the matrix", "i know kung fu"]
    );
}

#[test]
fn test_ngrams_of_at_least_two_words() {
    assert_eq!(
        ngrams_of_at_least_n_words(2, "hello this is dog"),
        vec![
            "hello this",
            "hello this is",
            "hello this is dog",
            "this is",
            "this is dog",
            "is dog",
        ]
    );
}

// =============================================================================
// Speaker stripping
// =============================================================================

#[test]
fn test_clean_speakers_two_speakers() {
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
fn test_clean_speakers_long_transcript() {
    assert_eq!(
        clean_speakers(
            "Han Solo :  Uh, everything's under control. Situation normal. \
             Voice : What happened? Han Solo :  Uh, we had a slight weapons malfunction, \
             but uh... everything's perfectly all right now. We're fine. We're all fine \
             here now, thank you. How are you? Voice : We're sending a squad up. \
             Han Solo : Uh, uh... negative, negative. We had a reactor leak here now. \
             Give us a few minutes to lock it down. Large leak, very dangerous. \
             Voice : Who is this? What's your operating number? Han Solo : Uh...  \
             Han Solo :  Boring conversation anyway. LUKE, WE'RE GONNA HAVE COMPANY!"
        ),
        "Uh, everything's under control. Situation normal. What happened? Uh, we had a \
         slight weapons malfunction, but uh... everything's perfectly all right now. \
         We're fine. We're all fine here now, thank you. How are you? We're sending a \
         squad up. Uh, uh... negative, negative. We had a reactor leak here now. Give us \
         a few minutes to lock it down. Large leak, very dangerous. Who is this? What's \
         your operating number? Uh... Boring conversation anyway. LUKE, WE'RE GONNA HAVE \
         COMPANY!"
    );
}

// =============================================================================
// Approximate semantic equality
// =============================================================================

#[test]
fn test_noisy_title_pairs() {
    let lexicon = Lexicon::from_words(["the", "seven"]);
    let same = [
        ("Snow White and theSeven Dwarfs", "Snow White and the Seven Dwarfs"),
        (
            "The Lord of the Rings: The Fellowship of the Ring",
            "Lord of The Rings - Fellowship of The Ring",
        ),
        ("judge dred", "judge dredd"),
        ("judge dred", "Judgg Dredd"),
    ];
    for (x, y) in same {
        assert!(approximate_semantic_equality(x, y, &lexicon), "{x} ~ {y}");
        assert!(approximate_semantic_equality(y, x, &lexicon), "{y} ~ {x}");
    }
    assert!(!approximate_semantic_equality("a name with more words", "a name", &lexicon));
    assert!(!approximate_semantic_equality("a name", "a name with more words", &lexicon));
}

// =============================================================================
// Keyword matching
// =============================================================================

#[test]
fn test_keyword_in_hebrew_announcement() {
    assert!(some_keyword_matches(
        &["בדסמ"],
        "חוזרים ליסודות בהרצאת “מבוא לבדסמ” במענטש, ב-15/01/24"
    ));
}

// =============================================================================
// Pattern-combinator laws
// =============================================================================

proptest! {
    #[test]
    fn prop_or_matches_union(s in "[a-z]{0,12}") {
        let a = escape_literal("cat");
        let b = escape_literal("dog");
        let combined = a.or(&b);
        let expected = a.is_match(&s).unwrap() || b.is_match(&s).unwrap();
        prop_assert_eq!(combined.is_match(&s).unwrap(), expected);
    }

    #[test]
    fn prop_flag_union_commutative(s in "[a-z]{1,8}") {
        let a = Pattern::new(s.clone()).case_insensitive();
        let b = Pattern::new(s).global();
        let ab = a.concat(&b);
        let ba = b.concat(&a);
        prop_assert_eq!(ab.flags(), ba.flags());
    }

    #[test]
    fn prop_find_all_spans_terminates_on_zero_length(s in "\\PC{0,40}") {
        // "a*" can match empty at every position; output must stay finite
        // and ordered.
        let p = Pattern::new("a*");
        let spans = p.find_all_spans(&s).unwrap();
        prop_assert!(spans.len() <= s.chars().count() + 1);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start || pair[0].start < pair[1].start);
        }
    }

    #[test]
    fn prop_simplify_idempotent(s in "\\PC{0,60}") {
        let once = simplify(&s);
        prop_assert_eq!(simplify(&once), once.clone());
    }
}

#[test]
fn test_flag_union_idempotent() {
    let a = Pattern::new("x").case_insensitive();
    assert_eq!(a.case_insensitive().flags(), a.flags());
    assert!(a.has_flag(Flag::CaseInsensitive));
}
