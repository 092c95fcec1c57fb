use crate::entities::Combination;
use crate::error::SolveError;

/// A validated order: a strictly positive number of units to ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Order {
    quantity: u64,
}

impl Order {
    /// Validates a requested quantity. Zero and negative quantities are refused.
    pub fn new(quantity: i64) -> Result<Self, SolveError> {
        match u64::try_from(quantity) {
            Ok(q) if q > 0 => Ok(Order { quantity: q }),
            _ => Err(SolveError::InvalidOrder { quantity }),
        }
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// Outcome of a solve call: the chosen combination together with the order it fulfills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub order: Order,
    pub combination: Combination,
}

impl Solution {
    pub fn shipped_amount(&self) -> u64 {
        self.combination.shipped_amount()
    }

    pub fn pack_count(&self) -> u64 {
        self.combination.pack_count()
    }

    /// Units shipped in excess of the ordered quantity
    pub fn overshoot(&self) -> u64 {
        self.combination.overshoot(self.order.quantity())
    }
}
