use crate::entities::{Catalog, Order, PackSize};

/// The catalog rewritten in units of the greatest common divisor of its pack sizes.
///
/// Every shippable amount is a multiple of `unit`, so orders are rounded up to whole units and
/// the search runs on the divided sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Greatest common divisor of all pack sizes
    pub unit: u64,
    /// Pack sizes expressed in units, ascending and never empty
    pub sizes: Vec<u64>,
}

impl Reduction {
    /// Reduces `catalog`, `None` if it is empty.
    pub fn new(catalog: &Catalog) -> Option<Self> {
        let unit = catalog.gcd()? as u64;
        let sizes = catalog.sizes().map(|s| s as u64 / unit).collect();
        Some(Reduction { unit, sizes })
    }

    /// Largest pack size, in units
    pub fn max(&self) -> u64 {
        self.sizes[self.sizes.len() - 1]
    }

    /// Index of the largest pack size
    pub fn max_idx(&self) -> usize {
        self.sizes.len() - 1
    }

    /// The ordered quantity in whole units, rounded up
    pub fn n_units(&self, order: Order) -> u64 {
        order.quantity().div_ceil(self.unit)
    }

    /// Converts a size index back into the pack size of the catalog
    pub fn pack_size(&self, index: usize) -> PackSize {
        (self.sizes[index] * self.unit) as PackSize
    }
}
