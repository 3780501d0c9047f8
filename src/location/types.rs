//! Location types

use crate::types::Filters;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Query keys owned by the codec
pub const RESERVED_KEYS: [&str; 3] = ["page", "pageSize", "offset"];

/// Flat key/value view of a page position, written to the location store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationParams {
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub offset: usize,
    #[serde(flatten)]
    pub filters: Filters,
}

impl LocationParams {
    /// Encode as a query string (without the leading `?`)
    ///
    /// Reserved keys come first, then filters in key order.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("page", &self.page.to_string())
            .append_pair("pageSize", &self.page_size.to_string())
            .append_pair("offset", &self.offset.to_string());
        for (key, value) in &self.filters {
            if RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }
}

/// Page position decoded from a query string, already clamped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedLocation {
    pub page: usize,
    pub page_size: usize,
    pub offset: usize,
    pub filters: Filters,
}

impl DecodedLocation {
    /// Location of the first page with no filters
    pub fn first_page(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            offset: 0,
            filters: Filters::new(),
        }
    }
}
