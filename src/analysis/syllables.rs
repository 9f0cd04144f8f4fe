//! Heuristic syllable estimation via vowel-run counting.
//!
//! Not linguistically exact: a syllable is approximated as a maximal run of
//! vowel characters, with one subtracted for a silent trailing `e` and a
//! floor of one syllable per word.

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Lower-case the word and strip sentence delimiters and whitespace.
fn clean_word(word: &str) -> String {
    word.to_ascii_lowercase()
        .chars()
        .filter(|&c| !is_stripped(c))
        .collect()
}

fn is_stripped(c: char) -> bool {
    matches!(c, '!' | '.' | '?') || c.is_whitespace()
}

fn vowel_runs(cleaned: &str) -> i32 {
    let mut runs = 0;
    let mut previous_was_vowel = false;
    for c in cleaned.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            runs += 1;
        }
        previous_was_vowel = vowel;
    }
    runs
}

/// Vowel-run count after the silent-e adjustment, before the clamp to one.
/// Can be zero or negative; words with 3 or more are polysyllabic. An empty
/// cleaned word has no trailing character and adjusts to zero.
fn adjusted_syllables(cleaned: &str) -> i32 {
    let mut count = vowel_runs(cleaned);
    if cleaned.ends_with('e') {
        count -= 1;
    }
    count
}

/// Estimated syllables for one word token. Always at least 1, including for
/// empty tokens produced by the word splitter.
pub fn estimate_syllables(word: &str) -> usize {
    adjusted_syllables(&clean_word(word)).max(1) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyllableTotals {
    pub syllables: usize,
    pub polysyllables: usize,
}

/// Aggregate syllable and polysyllable counts over word tokens.
pub fn tally<'a>(words: impl IntoIterator<Item = &'a str>) -> SyllableTotals {
    let mut totals = SyllableTotals::default();
    for word in words {
        let adjusted = adjusted_syllables(&clean_word(word));
        totals.syllables += adjusted.max(1) as usize;
        if adjusted >= 3 {
            totals.polysyllables += 1;
        }
    }
    totals
}
