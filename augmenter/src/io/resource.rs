//! Load and store the `TEST_CSV_RAW` literal inside a TypeScript fixture.
//!
//! The literal is located by an explicit two-marker scan: the opening marker
//! including its backtick, then the next backtick. Stored files contain only
//! the assignment statement.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::table::Table;
use crate::error::AugmentError;

/// Opening marker, backtick included.
pub const OPEN_MARKER: &str = "export const TEST_CSV_RAW = `";
/// Closes the literal.
pub const CLOSE_MARKER: char = '`';

/// Default fixture location, relative to the working directory.
pub const DEFAULT_RESOURCE: &str = "data/testData.ts";

/// Interior of the first `TEST_CSV_RAW` literal, verbatim.
///
/// Returns `None` when the opening marker or the closing backtick is missing.
pub fn extract_literal(contents: &str) -> Option<&str> {
    let start = contents.find(OPEN_MARKER)? + OPEN_MARKER.len();
    let rest = &contents[start..];
    let end = rest.find(CLOSE_MARKER)?;
    Some(&rest[..end])
}

/// Wrap CSV text in the assignment statement, with trailing newline.
pub fn render_literal(csv: &str) -> String {
    format!("{OPEN_MARKER}{csv}{CLOSE_MARKER};\n")
}

/// Read the fixture and parse its table.
pub fn load(path: &Path) -> Result<Table, AugmentError> {
    let contents = fs::read_to_string(path).map_err(|source| AugmentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = extract_literal(&contents)
        .and_then(Table::parse)
        .ok_or_else(|| AugmentError::NotFound {
            path: path.to_path_buf(),
        })?;
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "loaded fixture"
    );
    Ok(table)
}

/// Overwrite the fixture with the table wrapped in the literal statement.
pub fn store(path: &Path, table: &Table) -> Result<(), AugmentError> {
    let contents = render_literal(&table.render());
    fs::write(path, contents).map_err(|source| AugmentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = table.row_count(), "stored fixture");
    Ok(())
}
