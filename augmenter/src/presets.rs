//! The column sets added by each augmentation binary.

use anyhow::{Context, Result};

use crate::core::spec::{Candidates, ColumnSpec, KeyColumn, Lookup};
use crate::vocab::Vocabulary;

pub const MAKER_COLUMN: &str = "保有車_メーカー";
pub const CATEGORY_COLUMN: &str = "保有車_カテゴリ";
pub const CAR_NAME_COLUMN: &str = "保有車_車名";
pub const CAR_IMAGE_COLUMN: &str = "車イメージ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Random maker and category.
    CarColumns,
    /// Car name looked up from the maker and category columns.
    CarName,
    /// Random car image adjective.
    CarImage,
}

impl Preset {
    pub fn specs(self, vocab: &Vocabulary) -> Result<Vec<ColumnSpec>> {
        let specs = match self {
            Preset::CarColumns => vec![
                ColumnSpec::choice(
                    MAKER_COLUMN,
                    Candidates::new(vocab.makers.iter().cloned()).context("makers")?,
                ),
                ColumnSpec::choice(
                    CATEGORY_COLUMN,
                    Candidates::new(vocab.categories.iter().cloned()).context("categories")?,
                ),
            ],
            Preset::CarName => vec![ColumnSpec::lookup(CAR_NAME_COLUMN, car_name_lookup(vocab)?)],
            Preset::CarImage => vec![ColumnSpec::choice(
                CAR_IMAGE_COLUMN,
                Candidates::new(vocab.car_images.iter().cloned()).context("car images")?,
            )],
        };
        Ok(specs)
    }
}

fn car_name_lookup(vocab: &Vocabulary) -> Result<Lookup> {
    let keys = vec![
        KeyColumn::Named(MAKER_COLUMN.to_string()),
        KeyColumn::Named(CATEGORY_COLUMN.to_string()),
    ];
    let mut lookup = Lookup::new(keys, vocab.unknown_car_name.clone())?;
    for entry in &vocab.car_names {
        let names = Candidates::new(entry.names.iter().cloned())
            .with_context(|| format!("car names for ({}, {})", entry.maker, entry.category))?;
        lookup = lookup.with_entry([entry.maker.as_str(), entry.category.as_str()], names);
    }
    Ok(lookup)
}
