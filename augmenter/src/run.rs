//! One load → augment → store cycle against a fixture file.

use std::path::Path;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{info, instrument};

use crate::core::augment::{MalformedRow, UnresolvedKey, augment};
use crate::io::resource::{load, store};
use crate::presets::Preset;
use crate::vocab::Vocabulary;

/// What a completed run changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub added: Vec<String>,
    pub rows: usize,
    pub columns: usize,
    pub malformed: Vec<MalformedRow>,
    pub unresolved: Vec<UnresolvedKey>,
}

impl RunSummary {
    /// Stdout lines reporting the change.
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("augment: added={}", self.added.join(",")),
            format!("augment: rows={} columns={}", self.rows, self.columns),
        ]
    }

    /// Operator warnings for rows and keys that fell back.
    pub fn warning_lines(&self, include_malformed: bool) -> Vec<String> {
        let mut lines = Vec::new();
        for key in &self.unresolved {
            lines.push(format!(
                "column {} key {} not in header; every row set to fallback",
                key.column, key.key
            ));
        }
        if include_malformed {
            for row in &self.malformed {
                lines.push(format!(
                    "row {} has {} fields, column {} needs {}; fallback used",
                    row.row + 1,
                    row.fields,
                    row.column,
                    row.required
                ));
            }
        }
        lines
    }
}

/// Apply `preset` to the fixture at `resource` and rewrite it.
///
/// Nothing is written when any step before the store fails.
#[instrument(skip(resource, vocab, rng), fields(resource = %resource.display()))]
pub fn run_preset<R: Rng + ?Sized>(
    resource: &Path,
    preset: Preset,
    vocab: &Vocabulary,
    rng: &mut R,
) -> Result<RunSummary> {
    let specs = preset.specs(vocab).context("build column specs")?;
    let table = load(resource)?;
    let augmented = augment(&table, &specs, rng);
    store(resource, &augmented.table)?;

    let summary = RunSummary {
        added: specs.into_iter().map(|spec| spec.name).collect(),
        rows: augmented.table.row_count(),
        columns: augmented.table.column_count(),
        malformed: augmented.malformed,
        unresolved: augmented.unresolved,
    };
    info!(
        rows = summary.rows,
        columns = summary.columns,
        malformed = summary.malformed.len(),
        "fixture augmented"
    );
    Ok(summary)
}
