//! Full catalog of a site, materialized before any backup work starts

use crate::api::SiteApi;
use crate::error::ApiResult;
use crate::models::{Project, Workbook};

use super::ProjectIndex;

/// Every project and workbook visible to the session, in server order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub workbooks: Vec<Workbook>,
}

impl Catalog {
    /// Drain both listings
    pub async fn fetch<A>(api: &A) -> ApiResult<Self>
    where
        A: SiteApi + ?Sized,
    {
        let projects = api.list_projects().await?;
        let workbooks = api.list_workbooks().await?;
        tracing::info!(
            "Fetched catalog: {} projects, {} workbooks",
            projects.len(),
            workbooks.len()
        );

        Ok(Self {
            projects,
            workbooks,
        })
    }

    pub fn index(&self) -> ProjectIndex<'_> {
        ProjectIndex::new(&self.projects)
    }
}
