//! Writes one site's backup tree
//!
//! ```text
//! <site_dir>/<project path...>/<project>.json
//! <site_dir>/<project path...>/workbooks/<workbook>.json
//! <site_dir>/<project path...>/workbooks/<downloaded file>
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tracing::Instrument;

use super::sanitize::safe_segment;
use super::sidecar::write_sidecar;
use super::{Catalog, ProjectIndex};
use crate::api::SiteApi;
use crate::error::{AppError, Result};
use crate::models::{Project, Sidecar, Workbook};

/// Subfolder of a project folder holding its workbooks
pub const WORKBOOKS_DIR: &str = "workbooks";

/// Counts reported after a site completes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackupSummary {
    pub projects: usize,
    pub workbooks: usize,
}

/// Backs up every project and workbook of one site into `site_dir`
pub struct BackupWriter<'a, A: SiteApi + ?Sized> {
    api: &'a A,
    site_dir: PathBuf,
    span: tracing::Span,
}

impl<'a, A: SiteApi + ?Sized> BackupWriter<'a, A> {
    /// `span` scopes every log line this writer emits
    pub fn new(api: &'a A, site_dir: impl Into<PathBuf>, span: tracing::Span) -> Self {
        Self {
            api,
            site_dir: site_dir.into(),
            span,
        }
    }

    /// Fetch the catalog, then write all projects followed by all workbooks.
    ///
    /// Stops at the first failure; whatever was written so far stays on disk.
    pub async fn run(&self) -> Result<BackupSummary> {
        async {
            fs::create_dir_all(&self.site_dir)?;
            tracing::debug!("Backing up into {}", self.site_dir.display());

            let catalog = Catalog::fetch(self.api).await?;
            let summary = self.write_catalog(&catalog).await?;

            tracing::info!(
                "Backed up {} projects and {} workbooks",
                summary.projects,
                summary.workbooks
            );
            Ok::<_, AppError>(summary)
        }
        .instrument(self.span.clone())
        .await
    }

    /// Write artifacts for an already fetched catalog
    pub async fn write_catalog(&self, catalog: &Catalog) -> Result<BackupSummary> {
        let index = catalog.index();
        let mut summary = BackupSummary::default();

        for project in &catalog.projects {
            self.backup_project(&index, project).await?;
            summary.projects += 1;
        }

        for workbook in &catalog.workbooks {
            self.backup_workbook(&index, workbook).await?;
            summary.workbooks += 1;
        }

        Ok(summary)
    }

    async fn backup_project(&self, index: &ProjectIndex<'_>, project: &Project) -> Result<()> {
        let dir = index.project_dir(&self.site_dir, &project.id)?;
        fs::create_dir_all(&dir)?;

        let permissions = self.api.project_permissions(&project.id).await?;
        let sidecar = Sidecar::project(&project.name, permissions);
        let path = write_sidecar(&sidecar, &dir, &safe_segment(&project.name))?;

        tracing::debug!("Project '{}' -> {}", project.name, path.display());
        Ok(())
    }

    async fn backup_workbook(&self, index: &ProjectIndex<'_>, workbook: &Workbook) -> Result<()> {
        let dir = index
            .project_dir(&self.site_dir, workbook.project_id())?
            .join(WORKBOOKS_DIR);
        fs::create_dir_all(&dir)?;

        let permissions = self.api.workbook_permissions(&workbook.id).await?;
        let file = self.api.download_workbook(workbook, &dir).await?;
        let filename = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let sidecar = Sidecar::workbook(&workbook.name, &filename, permissions);
        let path = write_sidecar(&sidecar, &dir, &safe_segment(&workbook.name))?;

        tracing::debug!(
            "Workbook '{}' -> {} ({})",
            workbook.name,
            path.display(),
            filename
        );
        Ok(())
    }
}
