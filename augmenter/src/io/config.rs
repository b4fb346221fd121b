//! Optional augmentation settings stored in `.augment.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::io::resource::DEFAULT_RESOURCE;
use crate::vocab::Vocabulary;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG: &str = ".augment.toml";

/// Augmentation configuration (TOML).
///
/// Every field is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AugmentConfig {
    /// Fixture file holding the `TEST_CSV_RAW` literal.
    pub resource: PathBuf,

    /// Print a warning for rows too short for a lookup.
    pub warn_malformed: bool,

    pub vocabulary: Vocabulary,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            resource: PathBuf::from(DEFAULT_RESOURCE),
            warn_malformed: true,
            vocabulary: Vocabulary::default(),
        }
    }
}

impl AugmentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.resource.as_os_str().is_empty() {
            return Err(anyhow!("resource must be a non-empty path"));
        }
        self.vocabulary.validate()
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AugmentConfig::default()`.
pub fn load_config(path: &Path) -> Result<AugmentConfig> {
    if !path.exists() {
        let cfg = AugmentConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AugmentConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, AugmentConfig::default());
        assert_eq!(cfg.resource, PathBuf::from("data/testData.ts"));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("augment.toml");
        fs::write(
            &path,
            "resource = \"fixtures/data.ts\"\n\n[vocabulary]\nmakers = [\"マツダ\"]\n",
        )
        .expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.resource, PathBuf::from("fixtures/data.ts"));
        assert!(cfg.warn_malformed);
        assert_eq!(cfg.vocabulary.makers, vec!["マツダ"]);
        assert_eq!(cfg.vocabulary.categories, Vocabulary::default().categories);
    }

    #[test]
    fn car_names_table_parses() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("augment.toml");
        fs::write(
            &path,
            r#"
[vocabulary]
unknown_car_name = "不明"

[[vocabulary.car_names]]
maker = "マツダ"
category = "SUV"
names = ["CX-5"]
"#,
        )
        .expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.vocabulary.unknown_car_name, "不明");
        assert_eq!(cfg.vocabulary.car_names.len(), 1);
        assert_eq!(cfg.vocabulary.car_names[0].names, vec!["CX-5"]);
    }

    #[test]
    fn empty_vocabulary_set_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("augment.toml");
        fs::write(&path, "[vocabulary]\ncategories = []\n").expect("write");

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("categories"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("augment.toml");
        fs::write(&path, "resource = [").expect("write");
        assert!(load_config(&path).is_err());
    }
}
