//! Append generated columns to a table.

use rand::Rng;
use tracing::{debug, warn};

use crate::core::spec::{Candidates, ColumnSpec, KeyColumn, Lookup, ValueRule, min_width};
use crate::core::table::Table;

/// A row too short for a lookup's key positions; the fallback was appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    /// Zero-based data row index (header excluded).
    pub row: usize,
    pub column: String,
    pub fields: usize,
    pub required: usize,
}

/// A named lookup key missing from the header; every row got the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedKey {
    pub column: String,
    pub key: String,
}

/// Augmented table plus the non-fatal notices raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmented {
    pub table: Table,
    pub malformed: Vec<MalformedRow>,
    pub unresolved: Vec<UnresolvedKey>,
}

enum Plan<'a> {
    Choice(&'a Candidates),
    Lookup(&'a ColumnSpec, &'a Lookup, Option<Vec<usize>>),
}

/// Append one column per spec to the header and every row.
///
/// Specs apply in order, so a lookup may key on a column appended by an
/// earlier spec. Rows are independent of each other.
pub fn augment<R: Rng + ?Sized>(table: &Table, specs: &[ColumnSpec], rng: &mut R) -> Augmented {
    let mut header = table.header.clone();
    let mut unresolved = Vec::new();
    let mut plans = Vec::with_capacity(specs.len());

    for spec in specs {
        let plan = match &spec.rule {
            ValueRule::Choice(candidates) => Plan::Choice(candidates),
            ValueRule::Lookup(lookup) => {
                let positions = resolve_keys(&header, spec, lookup, &mut unresolved);
                Plan::Lookup(spec, lookup, positions)
            }
        };
        plans.push(plan);
        header.push(spec.name.clone());
    }

    let mut malformed = Vec::new();
    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut fields = row.clone();
            for plan in &plans {
                let value = match plan {
                    Plan::Choice(candidates) => candidates.pick(rng).to_string(),
                    Plan::Lookup(_, lookup, None) => lookup.fallback.clone(),
                    Plan::Lookup(spec, lookup, Some(positions)) => {
                        let required = min_width(positions);
                        if fields.len() < required {
                            malformed.push(MalformedRow {
                                row: index,
                                column: spec.name.clone(),
                                fields: fields.len(),
                                required,
                            });
                        }
                        lookup.value_for(&fields, positions, rng)
                    }
                };
                fields.push(value);
            }
            fields
        })
        .collect();

    debug!(
        specs = specs.len(),
        rows = table.row_count(),
        malformed = malformed.len(),
        "augmented table"
    );

    Augmented {
        table: Table { header, rows },
        malformed,
        unresolved,
    }
}

fn resolve_keys(
    header: &[String],
    spec: &ColumnSpec,
    lookup: &Lookup,
    unresolved: &mut Vec<UnresolvedKey>,
) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(lookup.keys.len());
    for key in &lookup.keys {
        match key {
            KeyColumn::Position(pos) => positions.push(*pos),
            KeyColumn::Named(name) => match header.iter().position(|column| column == name) {
                Some(pos) => positions.push(pos),
                None => {
                    warn!(column = %spec.name, key = %name, "lookup key column not in header");
                    unresolved.push(UnresolvedKey {
                        column: spec.name.clone(),
                        key: name.clone(),
                    });
                    return None;
                }
            },
        }
    }
    Some(positions)
}
