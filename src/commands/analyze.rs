use crate::analysis;
use crate::io::output::{OutputWriter, TerminalWriter};
use crate::io::read_document;
use anyhow::Result;
use log::info;
use std::path::Path;

/// Load a text file, run the readability pipeline and print the report to
/// stdout.
pub fn analyze_file(path: &Path) -> Result<()> {
    let document = read_document(path)?;
    info!(
        "analyzing {} ({} characters)",
        path.display(),
        document.len()
    );

    let report = analysis::analyze_text(&document);

    let stdout = std::io::stdout();
    let mut writer = TerminalWriter::new(stdout.lock());
    writer.write_report(&report)
}
