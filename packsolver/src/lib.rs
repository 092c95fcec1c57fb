//! Exact solver for the order pack problem.
//!
//! Given an order quantity and a [`Catalog`](entities::Catalog) of fixed pack sizes,
//! find the [`Combination`](entities::Combination) of whole packs that ships at least the
//! ordered quantity with the smallest possible overshoot, using as few packs as possible.

/// Entities to model the order pack problem
pub mod entities;

/// Errors reported by the solver and the catalog
pub mod error;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// The exact order pack solver
pub mod solver;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::{CatalogError, SolveError};
#[doc(inline)]
pub use solver::{PackSolver, solve};
