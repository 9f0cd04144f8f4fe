pub mod types;

pub use types::{AgeEstimates, ReadabilityReport, ReadabilityScores, TextCounts};
