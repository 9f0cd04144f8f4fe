pub mod output;

pub use output::{OutputWriter, TerminalWriter};

use crate::errors::ReadmapError;
use log::debug;
use std::fs;
use std::path::Path;

/// Load the whole document, joining lines with no separator. Line breaks are
/// removed outright, so words split across lines merge; this matches the
/// counting semantics downstream.
///
/// A missing or unreadable path is a hard error. The original tool logged
/// the failure and carried on with an empty document; failing fast here is a
/// deliberate change.
pub fn read_document(path: &Path) -> Result<String, ReadmapError> {
    let raw = fs::read_to_string(path).map_err(|source| ReadmapError::io(path, source))?;
    let document: String = raw.lines().collect();
    debug!(
        "loaded {} ({} bytes raw, {} after joining lines)",
        path.display(),
        raw.len(),
        document.len()
    );
    Ok(document)
}
