use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::projects::models::ProjectItem;

#[derive(Debug, Error)]
pub enum ProjectsError {
    #[error("could not read projects data: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid projects data (expected {{ items: [...] }}): {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ProjectsFile {
    items: Vec<ProjectItem>,
}

/// Reads `site_root/data/projects.json`. Called on every page view; nothing is cached.
pub async fn load_projects(site_root: &Path) -> Result<Vec<ProjectItem>, ProjectsError> {
    let path = site_root.join("data").join("projects.json");
    let raw = tokio::fs::read_to_string(&path).await?;
    let items = parse_projects(&raw)?;
    debug!("Loaded {} project items from {}", items.len(), path.display());
    Ok(items)
}

pub fn parse_projects(raw: &str) -> Result<Vec<ProjectItem>, serde_json::Error> {
    let file: ProjectsFile = serde_json::from_str(raw)?;
    Ok(file.items)
}
