//! Project models

use serde::{Deserialize, Serialize};

use super::{Paged, Pagination};

/// Project from /api/{v}/sites/{site}/projects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Absent for top-level projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    pub fn new(id: &str, name: &str, parent_project_id: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            parent_project_id: parent_project_id.map(str::to_string),
            description: None,
        }
    }
}

/// Envelope of a project listing page
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub projects: ProjectList,
}

/// Tableau sends `"projects": {}` when the page is empty
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectList {
    #[serde(default)]
    pub project: Vec<Project>,
}

impl Paged for ProjectsResponse {
    type Item = Project;

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    fn into_items(self) -> Vec<Project> {
        self.projects.project
    }
}
