// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::core::{AgeEstimates, ReadabilityReport, ReadabilityScores, TextCounts};

pub use crate::analysis::{
    age::{age_for_score, average_age},
    analyze_text,
    syllables::estimate_syllables,
    tokenize::{count_characters, count_sentences, count_words},
};

pub use crate::errors::ReadmapError;

pub use crate::io::output::{OutputWriter, TerminalWriter};
pub use crate::io::read_document;
