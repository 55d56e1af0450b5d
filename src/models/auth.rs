//! Authentication models

use serde::{Deserialize, Serialize};

/// Request body for `/auth/signin`
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest<'a> {
    pub credentials: SignInCredentials<'a>,
}

/// User name, password and the site to bind the session to
#[derive(Debug, Clone, Serialize)]
pub struct SignInCredentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
    pub site: SiteRef<'a>,
}

/// Site selector; the default site has an empty content URL
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRef<'a> {
    pub content_url: &'a str,
}

impl<'a> SignInRequest<'a> {
    pub fn new(name: &'a str, password: &'a str, site_id: &'a str) -> Self {
        Self {
            credentials: SignInCredentials {
                name,
                password,
                site: SiteRef { content_url: site_id },
            },
        }
    }
}

/// Response from `/auth/signin`
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub credentials: SessionCredentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionCredentials {
    pub token: String,
    pub site: SessionSite,
    #[serde(default)]
    pub user: Option<super::IdRef>,
}

/// Site the session is bound to
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSite {
    /// Internal site id used in every site-scoped path
    pub id: String,
    #[serde(default)]
    pub content_url: String,
}

/// Live session state
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub site_luid: String,
    pub site_id: String,
    pub user_id: Option<String>,
}

impl Session {
    pub fn from_response(site_id: &str, response: SignInResponse) -> Self {
        let credentials = response.credentials;
        Self {
            token: credentials.token,
            site_luid: credentials.site.id,
            site_id: site_id.to_string(),
            user_id: credentials.user.map(|u| u.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_request_shape() {
        let body = serde_json::to_value(SignInRequest::new("admin", "pw", "dev")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "credentials": {
                    "name": "admin",
                    "password": "pw",
                    "site": {"contentUrl": "dev"}
                }
            })
        );
    }

    #[test]
    fn test_session_from_response() {
        let response: SignInResponse = serde_json::from_str(
            r#"{"credentials": {
                "site": {"id": "9a8b7c", "contentUrl": "dev"},
                "user": {"id": "u-1"},
                "token": "tok"
            }}"#,
        )
        .unwrap();

        let session = Session::from_response("dev", response);
        assert_eq!(session.token, "tok");
        assert_eq!(session.site_luid, "9a8b7c");
        assert_eq!(session.site_id, "dev");
        assert_eq!(session.user_id.as_deref(), Some("u-1"));
    }
}
