//! Tableau Server REST API client
//!
//! Provides async methods for the endpoints a backup needs: sign-in,
//! paged listings, permissions and workbook downloads.

use async_trait::async_trait;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

use super::auth::{AuthManager, AUTH_HEADER};
use super::endpoints::{self, DownloadParams, PaginationParams};
use super::site::SiteApi;
use super::body_excerpt;
use crate::backup::sanitize::safe_segment;
use crate::error::{ApiError, ApiResult};
use crate::models::*;

/// Tableau REST API client
#[derive(Clone)]
pub struct TableauClient {
    /// HTTP client
    http: reqwest::Client,
    /// Base URL (e.g., "https://tableau.example.com")
    base_url: String,
    /// REST API version used in paths
    api_version: String,
    /// Authentication manager
    auth: Arc<AuthManager>,
    /// Page size for listings
    page_size: u32,
}

impl TableauClient {
    /// Create a new client
    pub fn new(base_url: &str, api_version: &str, page_size: u32) -> ApiResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .build()?;
        let auth = Arc::new(AuthManager::new(&base_url, api_version, http.clone()));

        Ok(Self {
            http,
            base_url,
            api_version: api_version.to_string(),
            auth,
            page_size,
        })
    }

    /// Sign in to a site
    pub async fn sign_in(&self, user: &str, password: &str, site_id: &str) -> ApiResult<Session> {
        self.auth.sign_in(user, password, site_id).await
    }

    /// Sign out of the current site
    pub async fn sign_out(&self) -> ApiResult<()> {
        self.auth.sign_out().await
    }

    /// Send an authenticated GET and check the status
    async fn send_get<Q>(&self, path: &str, query: &Q) -> ApiResult<reqwest::Response>
    where
        Q: serde::Serialize + ?Sized,
    {
        let session = self.auth.session().await?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(AUTH_HEADER, &session.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => ApiError::Authentication(message),
                404 => ApiError::NotFound(path.to_string()),
                _ => ApiError::Server {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        Ok(response)
    }

    /// Make a GET request and parse the JSON body
    async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let response = self.send_get(path, query).await?;

        // Get response body as text first for debugging
        let body_text = response.text().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to read response body: {}", e))
        })?;

        serde_json::from_str(&body_text).map_err(|e| {
            tracing::error!(
                "JSON parse error for GET {}: {}. Body: {}",
                path,
                e,
                body_excerpt(&body_text, 1000)
            );
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.get_with_query(path, &()).await
    }

    /// Fetch all pages of a paged listing
    pub async fn get_all_pages<R>(&self, path: &str) -> ApiResult<Vec<R::Item>>
    where
        R: Paged + DeserializeOwned,
    {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let params = PaginationParams::new().page(page).page_size(self.page_size);
            let response: R = self.get_with_query(path, &params).await?;

            let last = response.pagination().map(Pagination::is_last_page);
            let items = response.into_items();
            let count = items.len();
            tracing::debug!("Fetching {}: page {} got {} items", path, page, count);
            all_items.extend(items);

            if count == 0 || last.unwrap_or(true) {
                break;
            }

            page += 1;
        }

        Ok(all_items)
    }

    async fn site_luid(&self) -> ApiResult<String> {
        Ok(self.auth.session().await?.site_luid)
    }
}

#[async_trait]
impl SiteApi for TableauClient {
    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let path = endpoints::site_projects(&self.api_version, &self.site_luid().await?);
        self.get_all_pages::<ProjectsResponse>(&path).await
    }

    async fn list_workbooks(&self) -> ApiResult<Vec<Workbook>> {
        let path = endpoints::site_workbooks(&self.api_version, &self.site_luid().await?);
        self.get_all_pages::<WorkbooksResponse>(&path).await
    }

    async fn project_permissions(&self, project_id: &str) -> ApiResult<Vec<Permission>> {
        let path =
            endpoints::project_permissions(&self.api_version, &self.site_luid().await?, project_id);
        let response: PermissionsResponse = self.get(&path).await?;
        response.into_permissions()
    }

    async fn workbook_permissions(&self, workbook_id: &str) -> ApiResult<Vec<Permission>> {
        let path = endpoints::workbook_permissions(
            &self.api_version,
            &self.site_luid().await?,
            workbook_id,
        );
        let response: PermissionsResponse = self.get(&path).await?;
        response.into_permissions()
    }

    async fn download_workbook(&self, workbook: &Workbook, dir: &Path) -> ApiResult<PathBuf> {
        let path =
            endpoints::workbook_content(&self.api_version, &self.site_luid().await?, &workbook.id);
        let response = self.send_get(&path, &DownloadParams::default()).await?;

        let filename = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition)
            .map(|name| safe_segment(&name))
            .unwrap_or_else(|| format!("{}.twbx", safe_segment(&workbook.name)));

        let target = dir.join(filename);
        let mut file = tokio::fs::File::create(&target).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        tracing::debug!("Downloaded workbook '{}' to {}", workbook.name, target.display());
        Ok(target)
    }
}

/// Extract the base file name from a `Content-Disposition` header.
///
/// `filename*=UTF-8''...` wins over a plain `filename=`.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for part in header.split(';').map(str::trim) {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename" => plain = Some(value.trim().trim_matches('"').to_string()),
            "filename*" => {
                extended = value
                    .split_once("''")
                    .and_then(|(_, encoded)| percent_decode(encoded.trim_matches('"')))
            }
            _ => {}
        }
    }

    let name = extended.or(plain)?;
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().to_string();
    (!base.is_empty()).then_some(base)
}

fn percent_decode(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = value.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
