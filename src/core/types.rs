//! Common type definitions used across the codebase

/// Raw tallies extracted from a document in a single pass.
///
/// All counts follow literal split semantics: sentences are the segments
/// between `.`, `!` and `?` (empty segments included), words are the tokens
/// between single spaces (empty tokens included), and characters are every
/// non-space character. Splitting always yields at least one segment, so
/// `sentences >= 1` and `words >= 1` hold even for an empty document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCounts {
    pub sentences: usize,
    pub words: usize,
    pub characters: usize,
    pub syllables: usize,
    pub polysyllables: usize,
}

/// The four readability formula results for one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadabilityScores {
    pub ari: f64,
    pub flesch_kincaid: f64,
    pub smog: f64,
    pub coleman_liau: f64,
}

/// Estimated reader age per formula, from the fixed age-bracket table.
///
/// A score whose floor falls outside the table (below 1 or above 13) maps
/// to 0, meaning "no estimate".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgeEstimates {
    pub ari: u32,
    pub flesch_kincaid: u32,
    pub smog: u32,
    pub coleman_liau: u32,
}

/// Everything the reporter needs: counts, scores, per-formula ages and the
/// truncated average age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadabilityReport {
    pub counts: TextCounts,
    pub scores: ReadabilityScores,
    pub ages: AgeEstimates,
    pub average_age: u32,
}
