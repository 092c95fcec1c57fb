use std::cmp::Ordering;
use std::collections::BTreeMap;

use itertools::Itertools;

use crate::entities::PackSize;

/// Multiset of packs proposed to fulfill an order: pack size -> number of packs.
/// Never contains a size with a count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination {
    packs: BTreeMap<PackSize, u64>,
}

impl Combination {
    /// Builds a combination from `(size, count)` pairs.
    /// Counts of repeated sizes are summed, sizes ending up with a zero count are dropped.
    pub fn from_counts(counts: impl IntoIterator<Item = (PackSize, u64)>) -> Self {
        let mut packs = BTreeMap::new();
        for (size, count) in counts {
            *packs.entry(size).or_insert(0) += count;
        }
        packs.retain(|_, count| *count > 0);
        Combination { packs }
    }

    /// Number of packs of the given size
    pub fn count(&self, size: PackSize) -> u64 {
        self.packs.get(&size).copied().unwrap_or(0)
    }

    /// `(size, count)` pairs, ascending by size
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (PackSize, u64)> + '_ {
        self.packs.iter().map(|(&size, &count)| (size, count))
    }

    /// Total number of units shipped
    pub fn shipped_amount(&self) -> u64 {
        self.iter().map(|(size, count)| size as u64 * count).sum()
    }

    /// Total number of packs used
    pub fn pack_count(&self) -> u64 {
        self.packs.values().sum()
    }

    /// Number of different pack sizes used
    pub fn n_distinct_sizes(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Whether the combination ships at least `quantity` units
    pub fn covers(&self, quantity: u64) -> bool {
        self.shipped_amount() >= quantity
    }

    /// Units shipped in excess of `quantity`, zero if the combination falls short.
    pub fn overshoot(&self, quantity: u64) -> u64 {
        self.shipped_amount().saturating_sub(quantity)
    }

    /// Ranks two combinations that both cover the same order.
    /// [`Ordering::Less`] means `self` is preferred.
    ///
    /// 1. smaller shipped amount
    /// 2. fewer packs
    /// 3. more packs of the largest size, then of the next largest size, and so on
    pub fn preference_cmp(&self, other: &Combination) -> Ordering {
        let key = |c: &Combination| (c.shipped_amount(), c.pack_count());
        key(self).cmp(&key(other)).then_with(|| {
            self.packs
                .keys()
                .rev()
                .merge_by(other.packs.keys().rev(), |a, b| a >= b)
                .dedup()
                .map(|&size| other.count(size).cmp(&self.count(size)))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl FromIterator<(PackSize, u64)> for Combination {
    fn from_iter<T: IntoIterator<Item = (PackSize, u64)>>(iter: T) -> Self {
        Combination::from_counts(iter)
    }
}
