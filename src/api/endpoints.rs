//! REST API endpoints for Tableau Server

use serde::Serialize;

/// Build the versioned API prefix (e.g., "/api/3.4")
pub fn api_root(version: &str) -> String {
    format!("/api/{}", version)
}

/// Build URL for signing in
pub fn sign_in(version: &str) -> String {
    format!("{}/auth/signin", api_root(version))
}

/// Build URL for signing out
pub fn sign_out(version: &str) -> String {
    format!("{}/auth/signout", api_root(version))
}

/// Build URL for the project listing of a site
pub fn site_projects(version: &str, site_luid: &str) -> String {
    format!("{}/sites/{}/projects", api_root(version), site_luid)
}

/// Build URL for the workbook listing of a site
pub fn site_workbooks(version: &str, site_luid: &str) -> String {
    format!("{}/sites/{}/workbooks", api_root(version), site_luid)
}

/// Build URL for project permissions
pub fn project_permissions(version: &str, site_luid: &str, project_id: &str) -> String {
    format!("{}/{}/permissions", site_projects(version, site_luid), project_id)
}

/// Build URL for workbook permissions
pub fn workbook_permissions(version: &str, site_luid: &str, workbook_id: &str) -> String {
    format!("{}/{}/permissions", site_workbooks(version, site_luid), workbook_id)
}

/// Build URL for workbook content download
pub fn workbook_content(version: &str, site_luid: &str, workbook_id: &str) -> String {
    format!("{}/{}/content", site_workbooks(version, site_luid), workbook_id)
}

/// Pagination query parameters
#[derive(Debug, Clone, Serialize, Default)]
pub struct PaginationParams {
    #[serde(rename = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "pageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }
}

/// Query for workbook downloads; extracts are always left out
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadParams {
    pub include_extract: bool,
}

impl Default for DownloadParams {
    fn default() -> Self {
        Self {
            include_extract: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_scoped_paths() {
        assert_eq!(sign_in("3.4"), "/api/3.4/auth/signin");
        assert_eq!(site_projects("3.4", "abc"), "/api/3.4/sites/abc/projects");
        assert_eq!(
            project_permissions("3.4", "abc", "p1"),
            "/api/3.4/sites/abc/projects/p1/permissions"
        );
        assert_eq!(
            workbook_content("3.19", "abc", "w1"),
            "/api/3.19/sites/abc/workbooks/w1/content"
        );
    }

    #[test]
    fn test_pagination_params_names() {
        let params = PaginationParams::new().page(3).page_size(25);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, serde_json::json!({"pageNumber": 3, "pageSize": 25}));
    }
}
