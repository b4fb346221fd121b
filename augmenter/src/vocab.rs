//! Fixed vocabularies the presets draw values from.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Candidate car names for one (maker, category) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarNameEntry {
    pub maker: String,
    pub category: String,
    pub names: Vec<String>,
}

/// Value sets used by the built-in presets.
///
/// Missing fields in a config file fall back to the built-in lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Vocabulary {
    pub makers: Vec<String>,
    pub categories: Vec<String>,
    pub car_images: Vec<String>,
    pub car_names: Vec<CarNameEntry>,
    /// Written when a row's (maker, category) has no entry.
    pub unknown_car_name: String,
}

const MAKERS: &[&str] = &["トヨタ", "日産", "本田"];
const CATEGORIES: &[&str] = &["セダン", "SUV", "ミニバン"];
const CAR_IMAGES: &[&str] = &[
    "都会的な",
    "高級な",
    "先進的な",
    "個性的な",
    "若々しい",
    "スポーティな",
];
const CAR_NAMES: &[(&str, &str, [&str; 3])] = &[
    ("トヨタ", "セダン", ["クラウン", "カムリ", "カローラ"]),
    ("トヨタ", "SUV", ["RAV4", "ハリアー", "ランドクルーザー"]),
    ("トヨタ", "ミニバン", ["アルファード", "ヴォクシー", "シエンタ"]),
    ("日産", "セダン", ["スカイライン", "フーガ", "シルフィ"]),
    ("日産", "SUV", ["エクストレイル", "キックス", "アリア"]),
    ("日産", "ミニバン", ["セレナ", "エルグランド", "ノート"]),
    ("本田", "セダン", ["アコード", "シビック", "インサイト"]),
    ("本田", "SUV", ["ヴェゼル", "CR-V", "ZR-V"]),
    ("本田", "ミニバン", ["ステップワゴン", "フリード", "オデッセイ"]),
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            makers: owned(MAKERS),
            categories: owned(CATEGORIES),
            car_images: owned(CAR_IMAGES),
            car_names: CAR_NAMES
                .iter()
                .map(|(maker, category, names)| CarNameEntry {
                    maker: maker.to_string(),
                    category: category.to_string(),
                    names: owned(names),
                })
                .collect(),
            unknown_car_name: "Unknown".to_string(),
        }
    }
}

impl Vocabulary {
    pub fn validate(&self) -> Result<()> {
        if self.makers.is_empty() {
            bail!("vocabulary.makers must be non-empty");
        }
        if self.categories.is_empty() {
            bail!("vocabulary.categories must be non-empty");
        }
        if self.car_images.is_empty() {
            bail!("vocabulary.car_images must be non-empty");
        }
        for entry in &self.car_names {
            if entry.names.is_empty() {
                bail!(
                    "vocabulary.car_names entry ({}, {}) has no names",
                    entry.maker,
                    entry.category
                );
            }
        }
        Ok(())
    }
}
