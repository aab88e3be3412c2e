//! HTTP client for the Segment Profile API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    query::{EventsQuery, ExternalIdsQuery, MetadataQuery, Query, TraitsQuery},
    types::{ProfileId, Resource},
    Error,
};

/// Production endpoint. Namespaces are appended beneath it.
pub const DEFAULT_BASE_URL: &str = "https://profiles.segment.com/v1/spaces/";

/// Request timeout for profile lookups.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Segment Profile API, bound to one namespace.
///
/// Every request is a GET authenticated with HTTP Basic auth, using the
/// secret as username and an empty password. The client holds no per-call
/// state, so a shared reference can serve concurrent lookups.
#[derive(Clone)]
pub struct ProfileClient {
    client: reqwest::Client,
    base_url: Url,
    namespace: String,
    secret: String,
}

impl std::fmt::Debug for ProfileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileClient")
            .field("base_url", &self.base_url.as_str())
            .field("namespace", &self.namespace)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl ProfileClient {
    /// Creates a client for `namespace` against the production API.
    pub fn new(namespace: &str, secret: &str) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, namespace, secret)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, namespace: &str, secret: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::InvalidUrl(format!("{}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }
        Ok(Self {
            client: build_http_client(REQUEST_TIMEOUT)?,
            base_url,
            namespace: namespace.to_string(),
            secret: secret.to_string(),
        })
    }

    /// Replaces the request timeout, which defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, Error> {
        self.client = build_http_client(timeout)?;
        Ok(self)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Builds `{base}{namespace}/collections/users/profiles/{type}:{value}/{resource}`.
    ///
    /// Segments are percent-encoded only where they would otherwise break the
    /// path (`/`, `?`, `#`, `%`, whitespace); `:` and `@` pass through.
    fn get_url(&self, profile: &ProfileId, resource: Resource) -> Result<Url, Error> {
        // `.` and `..` would be dropped as dot-segments instead of sent.
        if matches!(self.namespace.as_str(), "." | "..") {
            return Err(Error::InvalidUrl(format!(
                "namespace {:?} is not a usable path segment",
                self.namespace
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(&self.namespace)
            .extend(["collections", "users", "profiles"])
            .push(&profile.to_string())
            .push(resource.as_str());
        Ok(url)
    }

    async fn get<T, Q>(
        &self,
        profile: &ProfileId,
        resource: Resource,
        query: &Q,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = query.add_to_url(&self.get_url(profile, resource)?)?;

        tracing::debug!(%resource, %url, "GET profile resource");
        let resp = self
            .client
            .get(url)
            .basic_auth(&self.secret, Some(""))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {}: {}", resource, e);
                Error::Network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {}: {} | body: {}",
                resource,
                e,
                truncate_body(&body)
            );
            Error::Decode { source: e, body }
        })
    }

    /// Fetches the traits of a profile.
    pub async fn get_traits(
        &self,
        profile: &ProfileId,
        query: &TraitsQuery,
    ) -> Result<Value, Error> {
        self.get::<Value, TraitsQuery>(profile, Resource::Traits, query)
            .await
    }

    /// Fetches the event history of a profile.
    pub async fn get_events(
        &self,
        profile: &ProfileId,
        query: &EventsQuery,
    ) -> Result<Value, Error> {
        self.get::<Value, EventsQuery>(profile, Resource::Events, query)
            .await
    }

    /// Fetches the external ids (emails, anonymous ids, ...) merged into a profile.
    pub async fn get_external_ids(
        &self,
        profile: &ProfileId,
        query: &ExternalIdsQuery,
    ) -> Result<Value, Error> {
        self.get::<Value, ExternalIdsQuery>(profile, Resource::ExternalIds, query)
            .await
    }

    /// Fetches profile metadata such as creation and last-seen times.
    pub async fn get_metadata(
        &self,
        profile: &ProfileId,
        query: &MetadataQuery,
    ) -> Result<Value, Error> {
        self.get::<Value, MetadataQuery>(profile, Resource::Metadata, query)
            .await
    }

    /// Fetches the links between this profile and other collections.
    pub async fn get_links(&self, profile: &ProfileId) -> Result<Value, Error> {
        self.get::<Value, ()>(profile, Resource::Links, &())
            .await
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Network(e)
        })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::{truncate_body, ProfileClient};
    use crate::types::{ProfileId, Resource};

    #[test]
    fn test_get_url() {
        let client = ProfileClient::new("spa_123", "secret").unwrap();
        let url = client
            .get_url(&ProfileId::email("u@x.com"), Resource::Links)
            .unwrap();
        insta::assert_snapshot!(
            url.to_string(),
            @"https://profiles.segment.com/v1/spaces/spa_123/collections/users/profiles/email:u@x.com/links"
        );
    }

    #[test]
    fn test_get_url_without_trailing_slash() {
        let client = ProfileClient::with_base_url("http://localhost:8080", "ns", "s").unwrap();
        let url = client
            .get_url(&ProfileId::user_id("42"), Resource::ExternalIds)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/ns/collections/users/profiles/user_id:42/external_ids"
        );
    }

    #[test]
    fn test_get_url_escapes_path_breaking_characters() {
        let client = ProfileClient::with_base_url("http://localhost:8080/", "ns", "s").unwrap();
        let url = client
            .get_url(&ProfileId::user_id("a/b?c"), Resource::Traits)
            .unwrap();
        assert_eq!(
            url.path(),
            "/ns/collections/users/profiles/user_id:a%2Fb%3Fc/traits"
        );
    }

    #[test]
    fn test_get_url_rejects_dot_namespace() {
        for namespace in [".", ".."] {
            let client = ProfileClient::new(namespace, "s").unwrap();
            let err = client
                .get_url(&ProfileId::email("u@x.com"), Resource::Links)
                .unwrap_err();
            assert!(matches!(err, crate::Error::InvalidUrl(_)), "{namespace:?}");
        }
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(ProfileClient::with_base_url("not a url", "ns", "s").is_err());
        assert!(ProfileClient::with_base_url("mailto:someone@example.com", "ns", "s").is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let client = ProfileClient::new("ns", "sk_live_abc").unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("sk_live_abc"));
        assert!(rendered.contains("ns"));
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");
        let long = "é".repeat(1500);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("...[truncated]"));
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProfileClient>();
    }
}
