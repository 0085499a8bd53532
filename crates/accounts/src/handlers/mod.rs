//! HTTP request handlers for the accounts API.

// Utility submodules
pub mod pagination;

// Handler modules
pub mod accounts;
pub mod stats;

// Re-export handlers from submodules (including utoipa __path types for OpenAPI)
pub use accounts::{
    __path_get_account, __path_get_accounts_by_owner, __path_list_accounts, get_account,
    get_accounts_by_owner, list_accounts,
};
pub use pagination::{PaginatedResponse, PaginationQuery};
pub use stats::{__path_get_stats, __path_health_check, get_stats, health_check};
