//! Test-only helpers for building fixtures and tables.

use std::path::Path;

use crate::core::spec::{Candidates, KeyColumn, Lookup};
use crate::core::table::Table;
use crate::io::resource::{load, render_literal};

/// Wrap CSV text in a `TEST_CSV_RAW` fixture file body.
pub fn fixture(csv: &str) -> String {
    render_literal(csv)
}

/// Parse CSV text, panicking on a blank block.
pub fn table(csv: &str) -> Table {
    Table::parse(csv).expect("non-empty csv")
}

/// Load the table back from a fixture file.
pub fn read_table(path: &Path) -> Table {
    load(path).expect("load fixture")
}

/// Positional (maker, category) lookup with the Toyota sedan entry only.
pub fn car_name_lookup(maker: usize, category: usize) -> Lookup {
    Lookup::new(
        vec![KeyColumn::Position(maker), KeyColumn::Position(category)],
        "Unknown",
    )
    .expect("lookup")
    .with_entry(
        ["トヨタ", "セダン"],
        Candidates::new(["クラウン", "カムリ", "カローラ"]).expect("candidates"),
    )
}
