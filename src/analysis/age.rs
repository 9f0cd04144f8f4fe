//! Score-to-age mapping via the fixed age-bracket table.

use crate::core::{AgeEstimates, ReadabilityScores};

/// Estimated reader age for floored scores 1 through 13.
const AGE_BRACKETS: [u32; 13] = [6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 24];

/// Map a raw score to an age. The score is floored toward negative infinity
/// (so -0.5 floors to -1, not 0); a floor outside 1..=13 maps to 0, meaning
/// no estimate. NaN also maps to 0.
pub fn age_for_score(score: f64) -> u32 {
    let floored = score.floor();
    if (1.0..=13.0).contains(&floored) {
        AGE_BRACKETS[floored as usize - 1]
    } else {
        0
    }
}

pub fn map_ages(scores: &ReadabilityScores) -> AgeEstimates {
    AgeEstimates {
        ari: age_for_score(scores.ari),
        flesch_kincaid: age_for_score(scores.flesch_kincaid),
        smog: age_for_score(scores.smog),
        coleman_liau: age_for_score(scores.coleman_liau),
    }
}

/// Average of the four ages with truncating integer division. [12,12,12,13]
/// averages to 12, not 12.25 rounded.
pub fn average_age(ages: &AgeEstimates) -> u32 {
    (ages.ari + ages.flesch_kincaid + ages.smog + ages.coleman_liau) / 4
}
