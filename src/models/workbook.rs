//! Workbook models

use serde::{Deserialize, Serialize};

use super::{IdRef, Paged, Pagination};

/// Workbook from /api/{v}/sites/{site}/workbooks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workbook {
    pub id: String,
    pub name: String,
    /// Owning project
    pub project: IdRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
}

impl Workbook {
    pub fn new(id: &str, name: &str, project_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            project: IdRef {
                id: project_id.to_string(),
                name: None,
            },
            content_url: None,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project.id
    }
}

/// Envelope of a workbook listing page
#[derive(Debug, Clone, Deserialize)]
pub struct WorkbooksResponse {
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub workbooks: WorkbookList,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkbookList {
    #[serde(default)]
    pub workbook: Vec<Workbook>,
}

impl Paged for WorkbooksResponse {
    type Item = Workbook;

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    fn into_items(self) -> Vec<Workbook> {
        self.workbooks.workbook
    }
}
