//! Shared listing/filter query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::error::AppError;

const DEFAULT_LIMIT: u32 = 25;
const MAX_LIMIT: u32 = 100;

/// `limit` / `page` / `q` parameters accepted by listing endpoints.
///
/// Uses `serde_with` to parse numbers out of query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub q: Option<String>,
}

impl ListParams {
    /// Validates and converts to a `(offset, limit)` pair for SQL queries.
    ///
    /// Page is 1-indexed and defaults to 1; limit defaults to 25, capped at
    /// 100.
    pub fn offset_limit(&self) -> Result<(i64, i64), AppError> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if page == 0 {
            return Err(AppError::bad_request(
                "page must be greater than 0",
                serde_json::json!({ "page": page }),
            ));
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(AppError::bad_request(
                format!("limit must be between 1 and {MAX_LIMIT}"),
                serde_json::json!({ "limit": limit }),
            ));
        }

        Ok((((page - 1) * limit) as i64, limit as i64))
    }

    /// Search text, trimmed, `None` when blank.
    pub fn search(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}
