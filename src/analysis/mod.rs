pub mod age;
pub mod formulas;
pub mod syllables;
pub mod tokenize;

use crate::core::{ReadabilityReport, TextCounts};
use log::debug;

/// Run the full pipeline over a loaded document: tokenize, estimate
/// syllables, evaluate the four formulas and map scores to reader ages.
pub fn analyze_text(text: &str) -> ReadabilityReport {
    let totals = syllables::tally(tokenize::split_words(text));
    let counts = TextCounts {
        sentences: tokenize::count_sentences(text),
        words: tokenize::count_words(text),
        characters: tokenize::count_characters(text),
        syllables: totals.syllables,
        polysyllables: totals.polysyllables,
    };
    debug!("counts: {counts:?}");

    let scores = formulas::score_all(&counts);
    let ages = age::map_ages(&scores);

    ReadabilityReport {
        counts,
        scores,
        ages,
        average_age: age::average_age(&ages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_for_reference_sentence() {
        let report = analyze_text("The cat sat on the mat.");
        assert_eq!(
            report.counts,
            TextCounts {
                sentences: 2,
                words: 6,
                characters: 18,
                syllables: 6,
                polysyllables: 0,
            }
        );
    }

    #[test]
    fn test_single_sentence_word_count() {
        let report = analyze_text("five little words no punctuation");
        assert_eq!(report.counts.sentences, 1);
        assert_eq!(report.counts.words, 5);
    }

    #[test]
    fn test_empty_document_is_degenerate_not_fatal() {
        let report = analyze_text("");
        assert_eq!(report.counts.sentences, 1);
        assert_eq!(report.counts.words, 1);
        assert_eq!(report.counts.characters, 0);
        // The lone empty token still clamps to one syllable
        assert_eq!(report.counts.syllables, 1);
        assert!(report.scores.ari.is_finite());
    }
}
