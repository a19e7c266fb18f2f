//! Query parameters appended to request URLs

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Ordered query parameters; inserting an existing key replaces its value in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace `key`. Later values win.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Page size, 1 to 500 depending on the endpoint.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit)
    }

    /// ISO-8601 timestamp filter.
    #[must_use]
    pub fn modified_since(self, timestamp: &str) -> Self {
        self.with("modified_since", timestamp)
    }

    /// ISO-8601 timestamp filter used by tracking endpoints.
    #[must_use]
    pub fn created_since(self, timestamp: &str) -> Self {
        self.with("created_since", timestamp)
    }

    /// Cursor returned by a previous page.
    #[must_use]
    pub fn next(self, cursor: &str) -> Self {
        self.with("next", cursor)
    }

    #[must_use]
    pub fn email(self, email: &str) -> Self {
        self.with("email", email)
    }

    #[must_use]
    pub fn status(self, status: &str) -> Self {
        self.with("status", status)
    }

    /// Mark the change as made by the contact (`action_by=ACTION_BY_VISITOR`).
    #[must_use]
    pub fn action_by_visitor(self) -> Self {
        self.with("action_by", crate::constants::ACTION_BY_VISITOR)
    }

    /// Interpret a loose parameter string.
    ///
    /// A leading `?` means a query string (`"?limit=5&next=abc"`); anything
    /// else is taken as a bare page size.
    pub fn determine(param: &str) -> Self {
        let Some(query) = param.strip_prefix('?') else {
            return Self::new().with("limit", param);
        };

        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .fold(Self::new(), |params, pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                params.with(decode(key), decode(value))
            })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map(Cow::into_owned).unwrap_or_else(|_| spaced.clone())
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |params, (k, v)| params.with(k, v))
    }
}
