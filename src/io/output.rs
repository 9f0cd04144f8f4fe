use crate::core::{AgeEstimates, ReadabilityReport, ReadabilityScores, TextCounts};
use colored::*;
use std::io::Write;

pub trait OutputWriter {
    fn write_report(&mut self, report: &ReadabilityReport) -> anyhow::Result<()>;
}

/// Human-readable report writer. Labels are bolded when stdout is a tty;
/// piped output is plain bytes.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ReadabilityReport) -> anyhow::Result<()> {
        self.write_counts(&report.counts)?;
        self.write_scores(&report.scores, &report.ages)?;
        self.write_average(report.average_age)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_counts(&mut self, counts: &TextCounts) -> anyhow::Result<()> {
        writeln!(self.writer, "{}: {}", "Words".bold(), counts.words)?;
        writeln!(self.writer, "{}: {}", "Sentences".bold(), counts.sentences)?;
        writeln!(self.writer, "{}: {}", "Characters".bold(), counts.characters)?;
        writeln!(self.writer, "{}: {}", "Syllables".bold(), counts.syllables)?;
        writeln!(
            self.writer,
            "{}: {}",
            "Polysyllables".bold(),
            counts.polysyllables
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(
        &mut self,
        scores: &ReadabilityScores,
        ages: &AgeEstimates,
    ) -> anyhow::Result<()> {
        self.write_score("Automated Readability Index", scores.ari, ages.ari)?;
        self.write_score(
            "Flesch–Kincaid readability tests",
            scores.flesch_kincaid,
            ages.flesch_kincaid,
        )?;
        self.write_score("Simple Measure of Gobbledygook", scores.smog, ages.smog)?;
        self.write_score("Coleman–Liau index", scores.coleman_liau, ages.coleman_liau)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_score(&mut self, name: &str, score: f64, age: u32) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}: {score:.2} (about {age}-year-olds.)",
            name.bold()
        )?;
        Ok(())
    }

    fn write_average(&mut self, average_age: u32) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "This text should be understood in average by {average_age}-year-olds."
        )?;
        Ok(())
    }
}
