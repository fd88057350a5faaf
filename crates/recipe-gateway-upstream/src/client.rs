use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::endpoint::{is_path_addressable, Endpoint, Upstream};
use crate::error::{UpstreamConfigError, UpstreamError};
use crate::traits::UpstreamFetch;

/// reqwest-backed upstream client.
///
/// Cloning is cheap and shares the underlying connection pool, so one
/// instance is built at startup and handed to every request.
#[derive(Debug, Clone)]
pub struct HttpUpstreamClient {
    http: reqwest::Client,
    recipe_base: Url,
    review_base: Url,
}

impl HttpUpstreamClient {
    /// Build a client from configuration, validating both base URLs.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("recipe-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            recipe_base: parse_base_url(Upstream::Recipe, &config.recipe_base_url)?,
            review_base: parse_base_url(Upstream::Review, &config.review_base_url)?,
        })
    }

    fn base_url(&self, upstream: Upstream) -> &Url {
        match upstream {
            Upstream::Recipe => &self.recipe_base,
            Upstream::Review => &self.review_base,
        }
    }

    /// Full URL for `segments` under the upstream's base URL.
    ///
    /// Each segment is percent-encoded, so an identifier containing `/` or `?`
    /// stays a single segment. A dot-only segment would be resolved away by
    /// URL parsing and is refused instead.
    pub fn url_for(&self, upstream: Upstream, segments: &[&str]) -> Result<Url, UpstreamError> {
        if let Some(id) = segments.iter().find(|s| !is_path_addressable(s)) {
            return Err(UpstreamError::UnaddressableId {
                upstream,
                id: (*id).to_string(),
            });
        }

        let mut url = self.base_url(upstream).clone();
        // Base URLs are checked in `new`, so they can always carry a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Single GET against `base_url + segments`.
    ///
    /// 200 yields the JSON body. Any other status, a transport failure, or a
    /// body that is not JSON yields the matching [`UpstreamError`].
    pub async fn get_path(
        &self,
        upstream: Upstream,
        segments: &[&str],
    ) -> Result<Value, UpstreamError> {
        let url = self.url_for(upstream, segments)?;
        tracing::debug!(%upstream, %url, "upstream GET");

        let unreachable = |err: reqwest::Error| UpstreamError::UpstreamUnreachable {
            upstream,
            message: err.to_string(),
        };

        let response = self.http.get(url.clone()).send().await.map_err(unreachable)?;
        let status = response.status();
        tracing::debug!(%upstream, %url, status = status.as_u16(), "upstream responded");

        if status != StatusCode::OK {
            return Err(UpstreamError::UpstreamErrorStatus {
                upstream,
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(unreachable)?;
        serde_json::from_slice(&body).map_err(|e| UpstreamError::MalformedUpstreamPayload {
            upstream,
            reason: format!("response body is not JSON: {e}"),
        })
    }
}

impl UpstreamFetch for HttpUpstreamClient {
    async fn get(&self, endpoint: &Endpoint) -> Result<Value, UpstreamError> {
        self.get_path(endpoint.upstream(), &endpoint.path_segments())
            .await
    }
}

fn parse_base_url(upstream: Upstream, raw: &str) -> Result<Url, UpstreamConfigError> {
    let invalid = |reason: String| UpstreamConfigError::InvalidBaseUrl {
        upstream,
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("base URL must not have a query or fragment".to_string()));
    }
    Ok(url)
}
