use serde::Deserialize;

use crate::server::error::AppError;

const DEFAULT_ENTRIES: u64 = 10;
const MAX_ENTRIES: u64 = 100;

/// `page` / `entries` query parameters shared by every paginated endpoint.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 0,
            entries: DEFAULT_ENTRIES,
        }
    }
}

impl PaginationParams {
    /// Rejects page sizes outside `1..=100`.
    pub fn validate(self) -> Result<Self, AppError> {
        if self.entries == 0 || self.entries > MAX_ENTRIES {
            return Err(AppError::BadRequest(format!(
                "entries must be between 1 and {}",
                MAX_ENTRIES
            )));
        }

        Ok(self)
    }
}

fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}

/// Number of pages needed to show `total` items at `per_page` per page.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
