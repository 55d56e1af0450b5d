//! Project forest to folder path resolution

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::sanitize::safe_segment;
use crate::error::ResolveError;
use crate::models::Project;

/// Id lookup over the fetched projects, built once per site
pub struct ProjectIndex<'a> {
    by_id: HashMap<&'a str, &'a Project>,
}

impl<'a> ProjectIndex<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            by_id: projects.iter().map(|p| (p.id.as_str(), p)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Result<&'a Project, ResolveError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| ResolveError::ProjectNotFound { id: id.to_string() })
    }

    /// Sanitized folder names from the top-level ancestor down to `id`.
    ///
    /// Fails when any project on the chain is missing or the chain loops.
    pub fn resolve_path(&self, id: &str) -> Result<Vec<String>, ResolveError> {
        let mut segments = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(id);

        while let Some(project_id) = current {
            if !visited.insert(project_id) {
                return Err(ResolveError::Cycle {
                    id: project_id.to_string(),
                });
            }
            let project = self.get(project_id)?;
            segments.push(safe_segment(&project.name));
            current = project.parent_project_id.as_deref();
        }

        segments.reverse();
        Ok(segments)
    }

    /// Folder of project `id` under `root`
    pub fn project_dir(&self, root: &Path, id: &str) -> Result<PathBuf, ResolveError> {
        let mut dir = root.to_path_buf();
        dir.extend(self.resolve_path(id)?);
        Ok(dir)
    }
}
