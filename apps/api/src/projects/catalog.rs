use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project metadata from the content manifest. Rendered bodies live elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Loads a JSON array of projects. A missing file yields an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("Project manifest {} not found; catalog is empty", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read project manifest {}", path.display()))?;
        let projects: Vec<Project> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid project manifest {}", path.display()))?;

        let mut slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        if let Some(dup) = slugs.windows(2).find(|w| w[0] == w[1]) {
            anyhow::bail!("Duplicate project slug '{}' in {}", dup[0], path.display());
        }

        tracing::info!("Loaded {} projects from {}", projects.len(), path.display());
        Ok(Self::new(projects))
    }

    /// Published projects, newest first; undated ones sort last.
    pub fn published(&self) -> Vec<&Project> {
        let mut list: Vec<&Project> = self.projects.iter().filter(|p| p.published).collect();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        list
    }

    /// Looks up any project by slug, published or not.
    pub fn find(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }
}
