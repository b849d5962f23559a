use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::paradigm::VerbParadigm;

const VERBS_ES: &str = include_str!("../assets/verbs.json");

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read verb dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed verb dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Verb dataset contains no verbs")]
    Empty,
}

/// Infinitive -> paradigm table. Read-only once loaded.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct VerbSet {
    verbs: BTreeMap<String, VerbParadigm>,
}

impl VerbSet {
    /// The Spanish dataset compiled into the binary.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(VERBS_ES)
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let set: VerbSet = serde_json::from_str(json)?;
        if set.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(set)
    }

    pub fn get(&self, infinitive: &str) -> Option<&VerbParadigm> {
        self.verbs.get(infinitive)
    }

    pub fn contains(&self, infinitive: &str) -> bool {
        self.verbs.contains_key(infinitive)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.verbs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}
