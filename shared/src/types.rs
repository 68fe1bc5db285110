//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Pagination parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl Pagination {
    /// Clamp page/limit to sane values (page >= 1, 1 <= limit <= 100)
    pub fn normalized(&self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, 100),
        }
    }

    /// Row offset for SQL queries. Computed in u64: page * limit can
    /// exceed u32 for large page numbers.
    pub fn offset(&self) -> u64 {
        let p = self.normalized();
        (p.page as u64 - 1) * p.limit as u64
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(pagination: &Pagination, total_items: u64) -> Self {
        let p = pagination.normalized();
        let total_pages = ((total_items + p.limit as u64 - 1) / p.limit as u64) as u32;
        Self {
            page: p.page,
            limit: p.limit,
            total_items,
            total_pages,
        }
    }
}
