use crate::errors::ApiClientError;
use crate::models::QueryParams;
use std::fmt;
use url::Url;

pub const HOST_VAR: &str = "TRELLO_HOST";
pub const API_KEY_VAR: &str = "TRELLO_API_KEY";
pub const API_TOKEN_VAR: &str = "TRELLO_API_TOKEN";

pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// API key and token sent as the `key` / `token` query parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub token: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("key", &self.key)
            .with("token", &self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Where the boards API lives and the credentials used when
/// `authenticate` is called without arguments.
#[derive(Clone, PartialEq, Eq)]
pub struct TrelloConfig {
    pub host: Url,
    pub api_key: Option<String>,
    pub api_token: Option<String>,
    pub user_agent: String,
}

impl TrelloConfig {
    pub fn new(host: &str) -> Result<Self, ApiClientError> {
        let host = Url::parse(host.trim().trim_end_matches('/'))?;
        Ok(Self {
            host,
            api_key: None,
            api_token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_credentials(mut self, api_key: impl Into<String>, api_token: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self.api_token = Some(api_token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reads `TRELLO_HOST`, `TRELLO_API_KEY` and `TRELLO_API_TOKEN`, after
    /// loading a `.env` file from the working directory if there is one.
    pub fn from_env() -> Result<Self, ApiClientError> {
        dotenvy::dotenv().ok();
        Self::from_parts(
            std::env::var(HOST_VAR).ok(),
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(API_TOKEN_VAR).ok(),
        )
    }

    fn from_parts(
        host: Option<String>,
        api_key: Option<String>,
        api_token: Option<String>,
    ) -> Result<Self, ApiClientError> {
        let host = non_blank(host).ok_or(ApiClientError::MissingConfig(HOST_VAR))?;
        let mut config = Self::new(&host)?;
        config.api_key = non_blank(api_key);
        config.api_token = non_blank(api_token);
        Ok(config)
    }
}

impl fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("host", &self.host.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
