use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use messkit_core::{MessError, Result};

use crate::chaos::ChaosLevel;

///
/// Settings for `create-sequencing-mess` read from a TOML file.
///
/// Every field is optional; anything left out falls back to the command
/// line value or its default.
///
/// ```toml
/// samples = 20
/// organisms = ["FLU", "RSV"]
/// techs = ["ILLUMINA", "ONT"]
/// chaos = "high"
/// seed = 7
/// ```
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadsConfig {
    pub samples: Option<usize>,
    pub organisms: Option<Vec<String>>,
    pub orgs: Option<Vec<String>>,
    pub techs: Option<Vec<String>>,
    pub years: Option<Vec<String>>,
    pub chaos: Option<String>,
    pub seed: Option<u64>,
    pub outdir: Option<PathBuf>,
}

impl ReadsConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| MessError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The configured chaos level, if any.
    pub fn chaos_level(&self) -> Result<Option<ChaosLevel>> {
        self.chaos.as_deref().map(str::parse).transpose()
    }
}
