//! Assembled requests and the ordered query builder

use crate::decode::DateFormat;
use crate::models::MeterType;
use crate::types::{JsonValue, QueryPairs};
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Method;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Meter-type filter; empty means every type
pub type MeterTypes = BTreeSet<MeterType>;

/// Body attached to a request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent as `application/json`
    Json(JsonValue),
    /// Already url-encoded `application/x-www-form-urlencoded` text
    Form(String),
}

/// A request, relative to a family base URL, before credentials are applied
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub query: QueryPairs,
    pub body: Option<RequestBody>,
}

impl Endpoint {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryPairs::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryBuilder) -> Self {
        self.query = query.build();
        self
    }

    #[must_use]
    pub fn with_json(mut self, body: JsonValue) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    #[must_use]
    pub fn with_form(mut self, encoded: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Form(encoded.into()));
        self
    }

    /// Value of the first query pair named `key`
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Builds query pairs in insertion order
///
/// Optional values that are unset are skipped rather than sent empty.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: QueryPairs,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn push_opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Date-only parameter (`2024-05-01`)
    #[must_use]
    pub fn push_date(self, key: &str, date: NaiveDate) -> Self {
        self.push(key, date.format(DateFormat::Date.pattern()))
    }

    /// Date-time parameter without offset (`2024-05-01 13:15:00`)
    #[must_use]
    pub fn push_date_time(self, key: &str, value: &NaiveDateTime) -> Self {
        let formatted = DateFormat::DateTime.format(value);
        self.push(key, formatted)
    }

    /// Comma-joined meter types, omitted when the set is empty
    #[must_use]
    pub fn push_meter_types(self, key: &str, meters: &MeterTypes) -> Self {
        if meters.is_empty() {
            return self;
        }
        let joined = meters
            .iter()
            .map(|meter| meter.as_str())
            .collect::<Vec<_>>()
            .join(",");
        self.push(key, joined)
    }

    pub fn build(self) -> QueryPairs {
        self.pairs
    }
}
