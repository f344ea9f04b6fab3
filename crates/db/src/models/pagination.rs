//! Pagination parameters shared by every list endpoint.

use catalog_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use serde::Deserialize;

/// `?skip=&limit=` query parameters.
///
/// `skip` defaults to 0 and `limit` to 10; see [`PageParams::bounds`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }

    /// Effective `(limit, offset)` after defaults and clamping.
    pub fn bounds(&self) -> (i64, i64) {
        (
            clamp_limit(self.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
            clamp_offset(self.skip),
        )
    }
}
