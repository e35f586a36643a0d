//! Error types for query operations.

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type for query operations.
///
/// Every query except paging is total over its input domain: empty inputs
/// yield empty or zero aggregates, never errors. Paging validates its page
/// window up front instead of silently computing a bogus offset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Page size below the minimum of one element per page
    #[error("invalid page size {page_size}: must be at least 1")]
    InvalidPageSize { page_size: usize },

    /// Page number below the first page (pages are numbered from 1)
    #[error("invalid page number {page_number}: must be at least 1")]
    InvalidPageNumber { page_number: usize },
}
