use std::path::Path;

use serde::Deserialize;

use crate::directory::DirectoryError;
use crate::models::person::Person;
use crate::models::project::Project;

const SAMPLE_SEED: &str = include_str!("../../seed/sample.json");

/// On-disk shape of a directory: `{"people": [...], "projects": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub people: Vec<Person>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Seed {
    pub fn sample() -> Result<Self, DirectoryError> {
        Ok(serde_json::from_str(SAMPLE_SEED)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
