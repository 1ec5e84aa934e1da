use crate::client::ApiClient;
use crate::config::{Credentials, TrelloConfig, API_KEY_VAR, API_TOKEN_VAR};
use crate::errors::ApiClientError;
use crate::models::{Board, BoardParams, DeleteResponse, QueryParams};
use futures_util::future::join_all;
use reqwest::Method;
use tracing::{info, warn};

/// Board operations against the `/1/boards` and `/1/members/me/boards`
/// endpoints.
///
/// Requests go out without credentials until [`BoardsApi::authenticate`]
/// installs a key and token; from then on every request carries them as
/// the `key` and `token` query parameters.
#[derive(Debug, Clone)]
pub struct BoardsApi {
    client: ApiClient,
    config: TrelloConfig,
    credentials: Option<Credentials>,
}

impl BoardsApi {
    pub fn new(config: TrelloConfig) -> Result<Self, ApiClientError> {
        let client = ApiClient::new(config.host.clone(), &config.user_agent)?;
        Ok(Self {
            client,
            config,
            credentials: None,
        })
    }

    pub fn from_env() -> Result<Self, ApiClientError> {
        Self::new(TrelloConfig::from_env()?)
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Replaces the credentials sent with every later request.
    ///
    /// Each omitted argument falls back to the configured default. On error
    /// the previous credentials stay in place.
    pub fn authenticate(
        &mut self,
        api_key: Option<&str>,
        api_token: Option<&str>,
    ) -> Result<(), ApiClientError> {
        let key = api_key
            .map(str::to_string)
            .or_else(|| self.config.api_key.clone())
            .ok_or(ApiClientError::MissingCredential(API_KEY_VAR))?;
        let token = api_token
            .map(str::to_string)
            .or_else(|| self.config.api_token.clone())
            .ok_or(ApiClientError::MissingCredential(API_TOKEN_VAR))?;

        let replaced = self.credentials.is_some();
        info!(replaced, "authenticated boards client");
        self.credentials = Some(Credentials::new(key, token));
        Ok(())
    }

    /// `POST /1/boards/`
    pub async fn create_board(&self, params: &QueryParams) -> Result<Board, ApiClientError> {
        self.call(Method::POST, &["1", "boards", ""], Some(params)).await
    }

    /// `PUT /1/boards/{id}`
    pub async fn update_board(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<Board, ApiClientError> {
        self.call(Method::PUT, &["1", "boards", id], Some(params)).await
    }

    /// `DELETE /1/boards/{id}`
    pub async fn delete_board(&self, id: &str) -> Result<DeleteResponse, ApiClientError> {
        let response: Option<DeleteResponse> =
            self.call(Method::DELETE, &["1", "boards", id], None).await?;
        Ok(response.unwrap_or_default())
    }

    /// `GET /1/boards/{id}`, optionally narrowed with `fields`.
    pub async fn get_board(
        &self,
        id: &str,
        params: Option<&QueryParams>,
    ) -> Result<Board, ApiClientError> {
        self.call(Method::GET, &["1", "boards", id], params).await
    }

    /// `GET /1/members/me/boards`: every board of the authenticated member,
    /// in the order the server returns them.
    pub async fn get_list_of_boards(
        &self,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Board>, ApiClientError> {
        self.call(Method::GET, &["1", "members", "me", "boards"], params)
            .await
    }

    /// Creates all boards concurrently. Results keep the input order.
    pub async fn create_boards(
        &self,
        boards: &[BoardParams],
    ) -> Vec<Result<Board, ApiClientError>> {
        let queries: Vec<QueryParams> = boards.iter().map(QueryParams::from).collect();
        join_all(queries.iter().map(|query| self.create_board(query))).await
    }

    /// Deletes all ids concurrently. Results keep the input order.
    pub async fn delete_boards<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Vec<Result<DeleteResponse, ApiClientError>> {
        let results = join_all(ids.iter().map(|id| self.delete_board(id.as_ref()))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = results.len(), "some boards could not be deleted");
        }
        let deleted = results.len() - failed;
        info!(deleted, "deleted boards");
        results
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        params: Option<&QueryParams>,
    ) -> Result<T, ApiClientError> {
        let query = self.query_for(params);
        let url = self.client.build_url(segments)?;
        let builder = self.client.request(method, url);
        let builder = self.client.add_query_params(builder, Some(&query));
        self.client.send_request(builder).await
    }

    fn query_for(&self, params: Option<&QueryParams>) -> QueryParams {
        let defaults = self
            .credentials
            .as_ref()
            .map(Credentials::to_query)
            .unwrap_or_default();
        match params {
            Some(params) => params.merged_over(&defaults),
            None => defaults,
        }
    }
}
