use serde::{Deserialize, Serialize};

use crate::Asset;
use crate::asset::null_as_empty;

/// One page of assets as returned by `GET /assets`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub page_number: i64,
    #[serde(default)]
    pub page_size: i64,
    #[serde(default)]
    pub total_count: i64,
}

impl PageResponse {
    /// Total page count, never less than one.
    pub fn effective_total_pages(&self) -> u32 {
        self.total_pages.clamp(1, i64::from(u32::MAX)) as u32
    }
}

/// Query parameters for one page request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub filter: String,
    pub max_assets: u32,
    /// Zero-based record offset.
    pub asset_offset: u64,
}

impl PageQuery {
    /// Build the query for a 1-based `page_number`.
    pub fn for_page(filter: impl Into<String>, page_number: u32, page_size: u32) -> Self {
        let page_index = u64::from(page_number.max(1) - 1);
        Self {
            filter: filter.into(),
            max_assets: page_size,
            asset_offset: page_index * u64::from(page_size),
        }
    }
}
