use reqwest::StatusCode;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Configuration Error: Invalid base URL: {0}")]
    BaseUrlInvalid(#[from] UrlParseError),

    #[error("Configuration Error: Failed to build HTTP client: {0}")]
    HttpClientBuildFailed(reqwest::Error),

    #[error("Configuration Error: {0} is not set")]
    MissingConfig(&'static str),

    #[error("Authentication Error: no {0} supplied and none configured")]
    MissingCredential(&'static str),

    #[error("Request Error: Failed to build or send the request: {0}")]
    RequestFailed(reqwest::Error),

    #[error("Network Error: Connection or timeout issue: {0}")]
    NetworkIssue(reqwest::Error),

    #[error("HTTP Error: Server responded with status {status}: {body}")]
    HttpError {
        // Server responded with non-2xx
        status: StatusCode,
        body: String,
        // Path only, the query string carries the credentials
        url: Option<String>,
    },

    #[error("Response Error: Failed to deserialize response body: {source}. Body snippet: '{body_snippet}'")]
    DeserializationFailed {
        source: serde_json::Error,
        body_snippet: String,
    },

    #[error("Client Internal Error: {0}")]
    Unexpected(String),
}

impl ApiClientError {
    /// HTTP status of a rejected request, `None` for every other failure.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ApiClientError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_bad_request(&self) -> bool {
        self.status_code() == Some(StatusCode::BAD_REQUEST)
    }
}
