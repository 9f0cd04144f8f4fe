//! The four readability regressions over aggregate text counts.
//!
//! Inputs are integer counts promoted to `f64`. The split semantics in
//! [`super::tokenize`] guarantee at least one word and one sentence, so the
//! divisions here never hit zero.

use crate::core::{ReadabilityScores, TextCounts};

pub fn automated_readability_index(counts: &TextCounts) -> f64 {
    let characters = counts.characters as f64;
    let words = counts.words as f64;
    let sentences = counts.sentences as f64;
    4.71 * characters / words + 0.5 * words / sentences - 21.43
}

pub fn flesch_kincaid(counts: &TextCounts) -> f64 {
    let words = counts.words as f64;
    let sentences = counts.sentences as f64;
    let syllables = counts.syllables as f64;
    0.39 * words / sentences + 11.8 * syllables / words - 15.59
}

pub fn smog(counts: &TextCounts) -> f64 {
    let polysyllables = counts.polysyllables as f64;
    let sentences = counts.sentences as f64;
    1.043 * (polysyllables * 30.0 / sentences).sqrt() + 3.1291
}

pub fn coleman_liau(counts: &TextCounts) -> f64 {
    let letters_per_100 = counts.characters as f64 / counts.words as f64 * 100.0;
    let sentences_per_100 = counts.sentences as f64 / counts.words as f64 * 100.0;
    0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
}

pub fn score_all(counts: &TextCounts) -> ReadabilityScores {
    ReadabilityScores {
        ari: automated_readability_index(counts),
        flesch_kincaid: flesch_kincaid(counts),
        smog: smog(counts),
        coleman_liau: coleman_liau(counts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(
        sentences: usize,
        words: usize,
        characters: usize,
        syllables: usize,
        polysyllables: usize,
    ) -> TextCounts {
        TextCounts {
            sentences,
            words,
            characters,
            syllables,
            polysyllables,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_ari_reference_value() {
        // "The cat sat on the mat." -> 2 sentences, 6 words, 18 characters
        let c = counts(2, 6, 18, 6, 0);
        assert_close(automated_readability_index(&c), 4.71 * 3.0 + 0.5 * 3.0 - 21.43);
    }

    #[test]
    fn test_flesch_kincaid_reference_value() {
        let c = counts(2, 6, 18, 6, 0);
        assert_close(flesch_kincaid(&c), 0.39 * 3.0 + 11.8 - 15.59);
    }

    #[test]
    fn test_smog_with_no_polysyllables_is_constant() {
        let c = counts(2, 6, 18, 6, 0);
        assert_close(smog(&c), 3.1291);
    }

    #[test]
    fn test_smog_reference_value() {
        let c = counts(10, 0, 0, 0, 12);
        assert_close(smog(&c), 1.043 * 36.0_f64.sqrt() + 3.1291);
    }

    #[test]
    fn test_coleman_liau_reference_value() {
        let c = counts(2, 6, 18, 6, 0);
        let l = 300.0;
        let s = 2.0 / 6.0 * 100.0;
        assert_close(coleman_liau(&c), 0.0588 * l - 0.296 * s - 15.8);
    }
}
