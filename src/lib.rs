mod classify;
pub mod cli;
mod engines;
pub mod error;
pub mod file;
pub mod options;
mod repair;
pub mod rules;

pub use error::FixError;
pub use file::{DEFAULT_DOCUMENT_PATH, FileFix, read_document, write_document};
pub use options::{EngineKind, Options};
pub use repair::FixLogEntry;
pub use rules::Rule;

use std::io::Write;
use std::path::Path;

/// Insert the commas missing after closing brackets in near-JSON text.
///
/// Applies the array-close rule, then the object-array-close rule on its output.
/// Only those two shapes are touched; the result is not checked to be JSON.
pub fn fix_to_string(input: &str, opts: &Options) -> Result<String, FixError> {
    repair::fix_to_string(input, opts)
}

/// Fix `input` and write the result into an `io::Write`.
pub fn fix_to_writer<W: Write>(
    input: &str,
    opts: &Options,
    writer: &mut W,
) -> Result<(), FixError> {
    let s = repair::fix_to_string(input, opts)?;
    writer
        .write_all(s.as_bytes())
        .map_err(|e| FixError::write("<writer>", e))
}

/// Fix `input` and return both the string result and a repair log.
/// The log is empty unless `opts.logging` is set.
pub fn fix_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<FixLogEntry>), FixError> {
    repair::fix_to_string_with_log(input, opts)
}

#[cfg(feature = "serde")]
/// Fix and then parse into `serde_json::Value`.
pub fn fix_to_value(input: &str, opts: &Options) -> Result<serde_json::Value, FixError> {
    let s = fix_to_string(input, opts)?;
    serde_json::from_str(&s).map_err(FixError::from_serde)
}

/// Read the file at `path`, fix it and overwrite it in place.
pub fn fix_file(path: impl AsRef<Path>, opts: &Options) -> Result<FileFix, FixError> {
    let path = path.as_ref();
    file::fix_file_to(path, path, opts)
}

#[cfg(test)]
mod tests;
