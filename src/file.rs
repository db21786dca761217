use crate::error::FixError;
use crate::options::Options;
use crate::repair::{self, FixLogEntry, Logger};
use std::fs;
use std::path::Path;

/// Path the tool was written for; used when no input is given on the command line.
pub const DEFAULT_DOCUMENT_PATH: &str = "data/platforms.json";

/// Outcome of fixing one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFix {
    /// Commas inserted across both rules.
    pub insertions: usize,
    /// Empty unless `Options::logging` is set.
    pub log: Vec<FixLogEntry>,
}

/// Read the whole document as text, line endings untouched.
pub fn read_document(path: impl AsRef<Path>) -> Result<String, FixError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| FixError::read(path, e))
}

/// Replace the document's contents with `text`.
///
/// Truncates and writes in place; a failure part way through can leave the file empty or partial.
pub fn write_document(path: impl AsRef<Path>, text: &str) -> Result<(), FixError> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|e| FixError::write(path, e))
}

/// Run the fix on `input` and write the result to `output` (which may be the same path).
pub fn fix_file_to(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    opts: &Options,
) -> Result<FileFix, FixError> {
    let (text, fix) = fix_document(input, opts)?;
    write_document(output, &text)?;
    Ok(fix)
}

/// Load, fix and return the text without writing anything.
pub fn fix_document(
    path: impl AsRef<Path>,
    opts: &Options,
) -> Result<(String, FileFix), FixError> {
    let content = read_document(path)?;
    let mut logger = Logger::new(opts);
    let text = repair::fix_with_logger(&content, opts, &mut logger)?;
    let fix = FileFix {
        insertions: logger.insertions(),
        log: logger.into_entries(),
    };
    Ok((text, fix))
}
