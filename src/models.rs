//! Wire types for the boards API: the query-string parameter sets sent with
//! each request and the board payloads that come back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered set of query-string parameters.
///
/// Keys are unique; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Layers `self` on top of `defaults`. Keys present in both take the
    /// value from `self`.
    pub fn merged_over(&self, defaults: &QueryParams) -> QueryParams {
        let mut merged = defaults.clone();
        merged
            .0
            .extend(self.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

/// Values accepted by the `filter` parameter of the member boards listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardFilter {
    All,
    Closed,
    Members,
    Open,
    Organization,
    Public,
    Starred,
}

impl BoardFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardFilter::All => "all",
            BoardFilter::Closed => "closed",
            BoardFilter::Members => "members",
            BoardFilter::Open => "open",
            BoardFilter::Organization => "organization",
            BoardFilter::Public => "public",
            BoardFilter::Starred => "starred",
        }
    }
}

impl fmt::Display for BoardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named board parameters. Unset fields are left out of the query string,
/// so the server applies its own defaults.
///
/// Anything not covered by a named field goes through [`BoardParams::param`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardParams {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub default_labels: Option<bool>,
    pub starred: Option<bool>,
    pub closed: Option<bool>,
    pub fields: Option<Vec<String>>,
    pub filter: Option<BoardFilter>,
    pub extra: QueryParams,
}

impl BoardParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new().name(name)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn default_labels(mut self, default_labels: bool) -> Self {
        self.default_labels = Some(default_labels);
        self
    }

    pub fn starred(mut self, starred: bool) -> Self {
        self.starred = Some(starred);
        self
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = Some(closed);
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn filter(mut self, filter: BoardFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.extra.insert(key, value);
        self
    }

    pub fn to_query(&self) -> QueryParams {
        // named fields win over free-form pairs with the same key
        let mut query = self.extra.clone();
        if let Some(name) = &self.name {
            query.insert("name", name);
        }
        if let Some(desc) = &self.desc {
            query.insert("desc", desc);
        }
        if let Some(default_labels) = self.default_labels {
            query.insert("defaultLabels", default_labels);
        }
        if let Some(starred) = self.starred {
            query.insert("starred", starred);
        }
        if let Some(closed) = self.closed {
            query.insert("closed", closed);
        }
        if let Some(fields) = &self.fields {
            query.insert("fields", fields.join(","));
        }
        if let Some(filter) = self.filter {
            query.insert("filter", filter);
        }
        query
    }
}

impl From<BoardParams> for QueryParams {
    fn from(params: BoardParams) -> Self {
        params.to_query()
    }
}

impl From<&BoardParams> for QueryParams {
    fn from(params: &BoardParams) -> Self {
        params.to_query()
    }
}

/// A board as returned by the API.
///
/// Only `id` is guaranteed: a `fields` restriction makes the server omit the
/// rest, which then fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub desc_data: Option<Value>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub id_organization: Option<String>,
    #[serde(default)]
    pub id_enterprise: Option<String>,
    #[serde(default)]
    pub starred: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub prefs: Option<BoardPrefs>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardPrefs {
    pub permission_level: String,
    pub voting: String,
    pub comments: String,
    pub invitations: String,
    pub self_join: bool,
    pub card_covers: bool,
    pub background: String,
    pub card_aging: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a successful delete: `{"_value": null}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(rename = "_value", default)]
    value: Option<Value>,
}

impl DeleteResponse {
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}
