use thiserror::Error;

use crate::entities::PackSize;

/// Reasons a solve call is refused. Retrying the same call fails identically.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("order quantity must be greater than zero, got {quantity}")]
    InvalidOrder { quantity: i64 },

    #[error("no pack sizes available, the catalog is empty")]
    EmptyCatalog,

    /// The search for this order and catalog needs a larger table than the solver allows.
    #[error("solving needs a table of {entries} entries, the limit is {limit}")]
    TableLimitExceeded { entries: u64, limit: u64 },
}

/// Reasons a modification of a [`Catalog`](crate::entities::Catalog) is refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    #[error("pack size must be greater than zero")]
    ZeroPackSize,

    #[error("pack size {0} already exists")]
    DuplicatePackSize(PackSize),

    #[error("pack size {0} not found")]
    UnknownPackSize(PackSize),
}
