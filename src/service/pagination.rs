//! Resolve list `limit` / `offset` query parameters.

use crate::config::PaginationDefaults;
use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl PageRequest {
    /// Absent or empty values take the defaults. Limit must be > 0, offset >= 0; limit is checked first.
    pub fn resolve(
        limit: Option<&str>,
        offset: Option<&str>,
        defaults: PaginationDefaults,
    ) -> Result<Self, AppError> {
        let limit = match limit.filter(|s| !s.is_empty()) {
            None => defaults.limit,
            Some(s) => s
                .parse::<i64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| AppError::BadRequest("Invalid limit value".into()))?,
        };
        let offset = match offset.filter(|s| !s.is_empty()) {
            None => defaults.offset,
            Some(s) => s
                .parse::<i64>()
                .ok()
                .filter(|n| *n >= 0)
                .ok_or_else(|| AppError::BadRequest("Invalid offset value".into()))?,
        };
        Ok(PageRequest { limit, offset })
    }
}
