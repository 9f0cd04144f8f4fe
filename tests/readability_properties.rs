use proptest::prelude::*;
use readmap::{analyze_text, count_sentences, count_words, estimate_syllables};

proptest! {
    #[test]
    fn prop_every_word_has_at_least_one_syllable(word in "[ -~]{0,24}") {
        prop_assert!(estimate_syllables(&word) >= 1);
    }

    #[test]
    fn prop_counts_bound_each_other(text in "[ -~]{0,200}") {
        let report = analyze_text(&text);
        prop_assert!(report.counts.polysyllables <= report.counts.words);
        prop_assert!(report.counts.syllables >= report.counts.words);
        prop_assert!(report.counts.sentences >= 1);
        prop_assert!(report.counts.words >= 1);
    }

    #[test]
    fn prop_analysis_is_deterministic(text in "[a-zA-Z .!?]{0,120}") {
        prop_assert_eq!(analyze_text(&text), analyze_text(&text));
    }

    #[test]
    fn prop_joined_words_count_exactly(words in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let text = words.join(" ");
        prop_assert_eq!(count_words(&text), words.len());
        prop_assert_eq!(count_sentences(&text), 1);
    }

    #[test]
    fn prop_scores_are_finite(text in "[a-zA-Z ,;:'\"-]{0,200}") {
        // Splitting always yields at least one word and sentence, so no
        // formula can divide by zero
        let report = analyze_text(&text);
        prop_assert!(report.scores.ari.is_finite());
        prop_assert!(report.scores.flesch_kincaid.is_finite());
        prop_assert!(report.scores.smog.is_finite());
        prop_assert!(report.scores.coleman_liau.is_finite());
    }
}
