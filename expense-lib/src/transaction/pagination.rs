use expense_repo::transaction_repo::PageOptions;
use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// `?page=&limit=` query string of the transaction list.
///
/// Both values must be integers. A page below 1 is treated as the first page and the
/// limit is clamped to `1..=MAX_LIMIT`.
#[derive(Deserialize, Debug, Default)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageQuery {
    pub fn page_options(&self) -> PageOptions {
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        PageOptions {
            offset: (page - 1).saturating_mul(limit),
            limit,
        }
    }
}
