use std::collections::BTreeSet;

use num_integer::Integer;

use crate::error::CatalogError;

/// Capacity of a single pack, in units.
pub type PackSize = u32;

/// Set of distinct pack sizes available to fulfill orders.
/// Sizes are kept in ascending order, the solver relies on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sizes: BTreeSet<PackSize>,
}

impl Catalog {
    /// Creates a catalog from the given sizes.
    /// Fails on a zero size or a size that appears more than once.
    pub fn new(sizes: impl IntoIterator<Item = PackSize>) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();
        for size in sizes {
            catalog.insert(size)?;
        }
        Ok(catalog)
    }

    /// Adds a pack size to the catalog.
    pub fn insert(&mut self, size: PackSize) -> Result<(), CatalogError> {
        if size == 0 {
            return Err(CatalogError::ZeroPackSize);
        }
        match self.sizes.insert(size) {
            true => Ok(()),
            false => Err(CatalogError::DuplicatePackSize(size)),
        }
    }

    /// Removes a pack size from the catalog.
    pub fn remove(&mut self, size: PackSize) -> Result<(), CatalogError> {
        match self.sizes.remove(&size) {
            true => Ok(()),
            false => Err(CatalogError::UnknownPackSize(size)),
        }
    }

    /// All pack sizes, ascending
    pub fn sizes(&self) -> impl DoubleEndedIterator<Item = PackSize> + ExactSizeIterator + '_ {
        self.sizes.iter().copied()
    }

    pub fn contains(&self, size: PackSize) -> bool {
        self.sizes.contains(&size)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn smallest(&self) -> Option<PackSize> {
        self.sizes.first().copied()
    }

    pub fn largest(&self) -> Option<PackSize> {
        self.sizes.last().copied()
    }

    /// Greatest common divisor of all pack sizes, `None` for an empty catalog.
    /// Every shippable amount is a multiple of it.
    pub fn gcd(&self) -> Option<PackSize> {
        self.sizes().reduce(|a, b| a.gcd(&b))
    }
}
