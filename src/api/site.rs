//! Site-scoped operations the backup writer needs from the server

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::ApiResult;
use crate::models::{Permission, Project, Workbook};

/// Everything a backup run asks of an authenticated site session.
///
/// [`TableauClient`](super::TableauClient) is the production implementation;
/// tests drive the writer with in-memory fakes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// All projects visible to the session, every page drained
    async fn list_projects(&self) -> ApiResult<Vec<Project>>;

    /// All workbooks visible to the session, every page drained
    async fn list_workbooks(&self) -> ApiResult<Vec<Workbook>>;

    async fn project_permissions(&self, project_id: &str) -> ApiResult<Vec<Permission>>;

    async fn workbook_permissions(&self, workbook_id: &str) -> ApiResult<Vec<Permission>>;

    /// Download the packaged workbook (without extracts) into `dir`.
    ///
    /// Returns the path of the written file; its name is chosen by the server.
    async fn download_workbook(&self, workbook: &Workbook, dir: &Path) -> ApiResult<PathBuf>;
}
