use crate::errors::ApiClientError;
use crate::models::QueryParams;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::redirect::Policy;
use reqwest::{Method, RequestBuilder};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const MAX_REDIRECTS: usize = 10;
const BODY_SNIPPET_LEN: usize = 256;

/// HTTP plumbing shared by every endpoint: base URL, default headers,
/// status handling and JSON decoding.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: Url, user_agent: &str) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| ApiClientError::Unexpected(format!("Invalid user agent: {e}")))?,
        );

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .redirect(Policy::limited(MAX_REDIRECTS))
            .default_headers(headers)
            .build()
            .map_err(ApiClientError::HttpClientBuildFailed)?;

        Ok(ApiClient {
            base_url,
            http_client,
        })
    }

    /// Appends `segments` to the base URL path. Each segment is
    /// percent-encoded; an empty last segment yields a trailing slash.
    pub fn build_url(&self, segments: &[&str]) -> Result<Url, ApiClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiClientError::Unexpected(format!("Base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, path = url.path(), "sending request");
        self.http_client.request(method, url)
    }

    pub fn add_query_params(
        &self,
        builder: RequestBuilder,
        params: Option<&QueryParams>,
    ) -> RequestBuilder {
        match params {
            Some(query_params) if !query_params.is_empty() => builder.query(query_params),
            _ => builder,
        }
    }

    pub async fn send_request<T: serde::de::DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiClientError> {
        let response = match builder.send().await {
            Ok(res) => res,
            Err(e) => {
                // the request URL carries the token in its query string
                let e = e.without_url();
                warn!(error = %e, "request did not complete");
                if e.is_redirect() {
                    return Err(ApiClientError::Unexpected(format!(
                        "Redirection error: {e}"
                    )));
                }
                if e.is_connect() || e.is_timeout() {
                    return Err(ApiClientError::NetworkIssue(e));
                }
                return Err(ApiClientError::RequestFailed(e));
            }
        };

        let status = response.status();
        let path = response.url().path().to_string();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ApiClientError::RequestFailed(e.without_url()))?;
            debug!(%status, path = %path, "request succeeded");
            return decode_body(&body);
        }

        if status.is_redirection() {
            // a 3xx without a usable Location header
            warn!(%status, path = %path, "redirect not followed");
            return Err(ApiClientError::Unexpected(format!(
                "Redirection error: {status}"
            )));
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        warn!(%status, path = %path, body = %body, "server rejected request");
        Err(ApiClientError::HttpError {
            status,
            body,
            url: Some(path),
        })
    }
}

fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiClientError> {
    // an empty 2xx body decodes like `null`
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|source| ApiClientError::DeserializationFailed {
        source,
        body_snippet: body.chars().take(BODY_SNIPPET_LEN).collect(),
    })
}
