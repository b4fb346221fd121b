//! Column definitions: a name plus the rule that produces each row's value.

use std::collections::HashMap;

use anyhow::{Result, bail};
use rand::Rng;

/// Non-empty set of literal values to draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates(Vec<String>);

impl Candidates {
    pub fn new<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            bail!("candidate set must not be empty");
        }
        Ok(Self(values))
    }

    /// Uniform draw.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.gen_range(0..self.0.len())]
    }

    #[cfg(test)]
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|candidate| candidate == value)
    }

    #[cfg(test)]
    pub fn values(&self) -> &[String] {
        &self.0
    }
}

/// Where a lookup key part is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyColumn {
    /// Zero-based field position.
    Position(usize),
    /// Header column name, resolved to a position when the column is generated.
    Named(String),
}

/// Keyed candidate table with a deterministic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub keys: Vec<KeyColumn>,
    pub entries: HashMap<Vec<String>, Candidates>,
    pub fallback: String,
}

impl Lookup {
    pub fn new(keys: Vec<KeyColumn>, fallback: impl Into<String>) -> Result<Self> {
        if keys.is_empty() {
            bail!("lookup needs at least one key column");
        }
        Ok(Self {
            keys,
            entries: HashMap::new(),
            fallback: fallback.into(),
        })
    }

    /// Register candidates for a composite key, replacing any previous entry.
    pub fn with_entry<K, S>(mut self, key: K, candidates: Candidates) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into_iter().map(Into::into).collect();
        self.entries.insert(key, candidates);
        self
    }

    /// Value for a row given the resolved key positions.
    ///
    /// Short rows get the fallback; see [`min_width`].
    pub fn value_for<R: Rng + ?Sized>(
        &self,
        row: &[String],
        positions: &[usize],
        rng: &mut R,
    ) -> String {
        if row.len() < min_width(positions) {
            return self.fallback.clone();
        }
        let key: Vec<String> = positions.iter().map(|&pos| row[pos].clone()).collect();
        match self.entries.get(&key) {
            Some(candidates) => candidates.pick(rng).to_string(),
            None => self.fallback.clone(),
        }
    }
}

/// Smallest row width that covers every position.
pub fn min_width(positions: &[usize]) -> usize {
    positions.iter().max().map_or(0, |max| max + 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueRule {
    Choice(Candidates),
    Lookup(Lookup),
}

/// Definition of one appended column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub rule: ValueRule,
}

impl ColumnSpec {
    pub fn choice(name: impl Into<String>, candidates: Candidates) -> Self {
        Self {
            name: name.into(),
            rule: ValueRule::Choice(candidates),
        }
    }

    pub fn lookup(name: impl Into<String>, lookup: Lookup) -> Self {
        Self {
            name: name.into(),
            rule: ValueRule::Lookup(lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|field| field.to_string()).collect()
    }

    #[test]
    fn empty_candidates_rejected() {
        let err = Candidates::new(Vec::<String>::new()).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn pick_stays_in_set() {
        let candidates = Candidates::new(["A", "B", "C"]).expect("candidates");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = candidates.pick(&mut rng);
            assert!(candidates.contains(picked), "unexpected value {picked}");
        }
    }

    #[test]
    fn lookup_requires_keys() {
        assert!(Lookup::new(Vec::new(), "Unknown").is_err());
    }

    #[test]
    fn lookup_uses_fallback_for_unmatched_and_short_rows() {
        let lookup = Lookup::new(vec![KeyColumn::Position(1), KeyColumn::Position(2)], "Unknown")
            .expect("lookup")
            .with_entry(["x", "y"], Candidates::new(["hit"]).expect("candidates"));
        let mut rng = StdRng::seed_from_u64(1);
        let positions = [1, 2];

        assert_eq!(lookup.value_for(&row(&["0", "x", "y"]), &positions, &mut rng), "hit");
        assert_eq!(lookup.value_for(&row(&["0", "x", "z"]), &positions, &mut rng), "Unknown");
        assert_eq!(lookup.value_for(&row(&["0", "x"]), &positions, &mut rng), "Unknown");
    }

    #[test]
    fn min_width_covers_highest_position() {
        assert_eq!(min_width(&[6, 7]), 8);
        assert_eq!(min_width(&[3, 0]), 4);
        assert_eq!(min_width(&[]), 0);
    }
}
