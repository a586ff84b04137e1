//! Offset/limit pagination over the registry's server entries

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page size used when the request does not give a usable `limit`
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Requested window into the server list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Build from raw query values
    ///
    /// Values that are absent or not non-negative integers fall back to the
    /// defaults (limit 50, offset 0).
    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            limit: parse_or(limit, defaults.limit),
            offset: parse_or(offset, defaults.offset),
        }
    }
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Pagination block of a server list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

/// One page of server entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerPage {
    pub servers: Vec<Value>,
    pub pagination: Pagination,
}

/// Slice `servers[offset..offset + limit]`, clamped to the list
pub fn paginate(servers: &[Value], page: PageRequest) -> ServerPage {
    let total = servers.len();
    let end = page.offset.saturating_add(page.limit);
    let start = page.offset.min(total);

    ServerPage {
        servers: servers[start..end.min(total)].to_vec(),
        pagination: Pagination {
            total,
            limit: page.limit,
            offset: page.offset,
            has_more: end < total,
        },
    }
}
