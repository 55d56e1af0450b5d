//! Authentication manager for the Tableau REST API
//!
//! Holds the site-bound session token obtained at sign-in. There is no token
//! refresh: a session lives for one site's backup.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::{body_excerpt, endpoints};
use crate::error::{ApiError, ApiResult};
use crate::models::{Session, SignInRequest, SignInResponse};

/// Header carrying the session token
pub const AUTH_HEADER: &str = "X-Tableau-Auth";

/// Manages the current session
pub struct AuthManager {
    /// Current session
    state: Arc<RwLock<Option<Session>>>,
    /// Base URL for auth endpoints
    base_url: String,
    /// REST API version
    api_version: String,
    /// HTTP client for auth requests
    http: reqwest::Client,
}

impl AuthManager {
    /// Create a new auth manager
    pub fn new(base_url: &str, api_version: &str, http: reqwest::Client) -> Self {
        Self {
            state: Arc::new(RwLock::new(None)),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api_version.to_string(),
            http,
        }
    }

    /// Sign in to a site, replacing any previous session
    pub async fn sign_in(&self, user: &str, password: &str, site_id: &str) -> ApiResult<Session> {
        let url = format!("{}{}", self.base_url, endpoints::sign_in(&self.api_version));

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&SignInRequest::new(user, password, site_id))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();

            return Err(match status {
                400 | 401 | 403 => ApiError::Authentication(message),
                404 => ApiError::NotFound(format!("site '{}'", site_id)),
                _ => ApiError::Server { status, message },
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        let sign_in: SignInResponse = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "JSON parse error: {}. Body: {}",
                e,
                body_excerpt(&body, 500)
            ))
        })?;

        let session = Session::from_response(site_id, sign_in);
        tracing::debug!("Signed in to site '{}' ({})", site_id, session.site_luid);
        *self.state.write().await = Some(session.clone());

        Ok(session)
    }

    /// Current session, or an authentication error when signed out
    pub async fn session(&self) -> ApiResult<Session> {
        self.state
            .read()
            .await
            .clone()
            .ok_or_else(|| ApiError::Authentication("Not signed in".into()))
    }

    /// Sign out and clear the session
    pub async fn sign_out(&self) -> ApiResult<()> {
        let Some(session) = self.state.write().await.take() else {
            return Ok(());
        };

        let url = format!("{}{}", self.base_url, endpoints::sign_out(&self.api_version));
        let response = self
            .http
            .post(&url)
            .header(AUTH_HEADER, &session.token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Server { status, message });
        }

        tracing::debug!("Signed out of site '{}'", session.site_id);
        Ok(())
    }
}
