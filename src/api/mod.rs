//! API client module

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod site;

#[cfg(test)]
pub(crate) mod stub_server;

pub use auth::AuthManager;
pub use client::TableauClient;
pub use site::SiteApi;

#[cfg(test)]
pub use site::MockSiteApi;

/// First `max_chars` characters of a response body, for error logs.
///
/// Cuts on a character boundary; bodies are server-controlled.
pub(crate) fn body_excerpt(body: &str, max_chars: usize) -> &str {
    match body.char_indices().nth(max_chars) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_excerpt_respects_char_boundaries() {
        let body = format!("{}é not json", "x".repeat(499));
        let excerpt = body_excerpt(&body, 500);
        assert_eq!(excerpt.chars().count(), 500);
        assert!(excerpt.ends_with('é'));
    }

    #[test]
    fn test_body_excerpt_short_body_is_unchanged() {
        assert_eq!(body_excerpt("ünïcödé", 500), "ünïcödé");
        assert_eq!(body_excerpt("", 10), "");
        assert_eq!(body_excerpt("abc", 2), "ab");
    }
}
