//! One page of a collection response

use serde::{Deserialize, Serialize};

use crate::query::QueryParams;
use crate::record::Record;

/// Items of one page plus the opaque cursor of the page after it.
///
/// Built once per response and never merged with other pages. Fetching the
/// next page is left to the caller via [`PaginatedResult::next_params`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult {
    pub items: Vec<Record>,
    /// Present iff the server reported a following page.
    pub cursor: Option<String>,
}

impl PaginatedResult {
    pub fn new(items: Vec<Record>, cursor: Option<String>) -> Self {
        Self { items, cursor }
    }

    pub fn has_next(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Query parameters requesting the following page, if there is one.
    ///
    /// The cursor is the remainder of a query string that started with
    /// `next=`, so any trailing `&key=value` pairs become parameters of
    /// their own.
    pub fn next_params(&self) -> Option<QueryParams> {
        self.cursor.as_deref().map(|cursor| QueryParams::determine(&format!("?next={cursor}")))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.items.iter()
    }
}

impl IntoIterator for PaginatedResult {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a PaginatedResult {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
