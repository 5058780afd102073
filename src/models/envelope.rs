//! Response envelope shared by every backend endpoint.

use serde::{Deserialize, Serialize};

fn default_success() -> bool {
    true
}

/// `{ success, message, code, data, pagination? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: i64,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: String::new(),
            code: 200,
            data: Some(data),
            pagination: None,
        }
    }
}

/// Pagination metadata, passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub has_next: bool,
}

/// Collection payload: either a bare array or a nested `{ data: [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListData<T> {
    Flat(Vec<T>),
    Nested(NestedList<T>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct NestedList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// A fetched collection with whatever pagination the backend reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    pub fn from_list(list: ListData<T>, outer: Option<Pagination>) -> Self {
        match list {
            ListData::Flat(items) => Page {
                items,
                pagination: outer,
            },
            ListData::Nested(nested) => Page {
                items: nested.data,
                pagination: nested.pagination.or(outer),
            },
        }
    }
}
