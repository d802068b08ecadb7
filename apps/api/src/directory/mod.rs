//! Directory — the people and projects the dashboard works with.
//!
//! The formation engine never reads from here; handlers fetch a roster and
//! pass it in. `AppState` holds an `Arc<dyn Directory>` so a database-backed
//! provider can replace the in-memory one without touching callers.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::person::Person;
use crate::models::project::Project;

pub mod handlers;
pub mod seed;

use seed::Seed;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate person id '{0}'")]
    DuplicatePerson(String),

    #[error("Duplicate project id '{0}'")]
    DuplicateProject(String),

    #[error("Project '{project}' references unknown person '{person}'")]
    UnknownMember { project: String, person: String },

    /// For providers backed by an external store.
    #[allow(dead_code)]
    #[error("Directory backend unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait Directory: Send + Sync {
    /// Everyone, in a stable order. Ranking ties fall back to this order.
    async fn people(&self) -> Result<Vec<Person>, DirectoryError>;

    async fn projects(&self) -> Result<Vec<Project>, DirectoryError>;

    async fn project(&self, id: &str) -> Result<Option<Project>, DirectoryError>;
}

/// Read-only directory held in memory, validated once at construction.
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    people: Vec<Person>,
    projects: Vec<Project>,
}

impl InMemoryDirectory {
    pub fn from_seed(seed: Seed) -> Result<Self, DirectoryError> {
        let mut person_ids = HashSet::new();
        for person in &seed.people {
            if !person_ids.insert(person.id.as_str()) {
                return Err(DirectoryError::DuplicatePerson(person.id.clone()));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &seed.projects {
            if !project_ids.insert(project.id.as_str()) {
                return Err(DirectoryError::DuplicateProject(project.id.clone()));
            }
            if let Some(unknown) = project
                .referenced_person_ids()
                .find(|id| !person_ids.contains(id))
            {
                return Err(DirectoryError::UnknownMember {
                    project: project.id.clone(),
                    person: unknown.to_string(),
                });
            }
        }

        Ok(Self {
            people: seed.people,
            projects: seed.projects,
        })
    }

    /// The built-in sample organisation.
    pub fn sample() -> Result<Self, DirectoryError> {
        Self::from_seed(Seed::sample()?)
    }

    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let directory = Self::from_seed(Seed::from_file(path)?)?;
        info!(
            path = %path.display(),
            people = directory.people.len(),
            projects = directory.projects.len(),
            "Loaded directory seed"
        );
        Ok(directory)
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn people(&self) -> Result<Vec<Person>, DirectoryError> {
        Ok(self.people.clone())
    }

    async fn projects(&self) -> Result<Vec<Project>, DirectoryError> {
        Ok(self.projects.clone())
    }

    async fn project(&self, id: &str) -> Result<Option<Project>, DirectoryError> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }
}
