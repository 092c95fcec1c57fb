mod reach;
mod reduction;
mod residue;

use itertools::Itertools;
use log::debug;

use crate::entities::{Catalog, Combination, Order, Solution};
use crate::error::SolveError;
use crate::util::assertions;
use reach::ReachTable;
use residue::ResidueTable;

#[doc(inline)]
pub use reduction::Reduction;

/// Number of table entries a single solve call may allocate, unless configured otherwise
pub const DEFAULT_TABLE_LIMIT: u64 = 1 << 24;

/// Largest configurable table limit, pack counts in the amount table are `u32`
pub const MAX_TABLE_LIMIT: u64 = u32::MAX as u64;

/// Solves orders against a fixed catalog of pack sizes.
/// The catalog is chosen by the caller, the solver has no default of its own.
#[derive(Debug, Clone)]
pub struct PackSolver {
    catalog: Catalog,
    table_limit: u64,
}

impl PackSolver {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            table_limit: DEFAULT_TABLE_LIMIT,
        }
    }

    /// Bounds the table entries allocated per solve call, clamped to [`MAX_TABLE_LIMIT`].
    pub fn with_table_limit(mut self, table_limit: u64) -> Self {
        self.table_limit = table_limit.min(MAX_TABLE_LIMIT);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn table_limit(&self) -> u64 {
        self.table_limit
    }

    /// See [`solve`].
    pub fn solve(&self, quantity: i64) -> Result<Solution, SolveError> {
        solve_within(quantity, &self.catalog, self.table_limit)
    }
}

/// Finds the combination of packs from `catalog` that ships at least `quantity` units, with
///
/// 1. the smallest shipped amount,
/// 2. then the fewest packs,
/// 3. then the most packs of the largest size, of the next largest size, and so on.
///
/// Fails with [`SolveError::EmptyCatalog`] if there are no pack sizes (checked first),
/// with [`SolveError::InvalidOrder`] if `quantity` is not strictly positive and with
/// [`SolveError::TableLimitExceeded`] if the search would need more than [`DEFAULT_TABLE_LIMIT`]
/// table entries.
pub fn solve(quantity: i64, catalog: &Catalog) -> Result<Solution, SolveError> {
    solve_within(quantity, catalog, DEFAULT_TABLE_LIMIT)
}

fn solve_within(
    quantity: i64,
    catalog: &Catalog,
    table_limit: u64,
) -> Result<Solution, SolveError> {
    let reduction = Reduction::new(catalog).ok_or(SolveError::EmptyCatalog)?;
    let order = Order::new(quantity)?;
    let n_units = reduction.n_units(order);

    let max = reduction.max();
    // covering with copies of a single size is always possible
    let upper = reduction
        .sizes
        .iter()
        .map(|&size| n_units.div_ceil(size) * size)
        .min()
        .unwrap_or(n_units);
    let class_entries = max * reduction.sizes.len() as u64;

    let combination = if upper < class_entries.min(table_limit) {
        debug!(
            "[SOLVER] order {}: unit {}, amount table up to {upper}",
            order.quantity(),
            reduction.unit
        );
        cover_by_table(&reduction, n_units, upper + 1)
    } else if class_entries <= table_limit {
        let amount = min_shippable(&reduction, n_units);
        debug!(
            "[SOLVER] order {}: unit {}, {} classes, shipping {amount} units",
            order.quantity(),
            reduction.unit,
            max
        );
        match cover_by_class(&reduction, amount) {
            Some(combination) => combination,
            None if amount < table_limit => {
                debug!("[SOLVER] order {}: falling back to the amount table", order.quantity());
                cover_by_table(&reduction, amount, amount + 1)
            }
            None => {
                return Err(SolveError::TableLimitExceeded {
                    entries: amount + 1,
                    limit: table_limit,
                });
            }
        }
    } else {
        return Err(SolveError::TableLimitExceeded {
            entries: class_entries.min(upper + 1),
            limit: table_limit,
        });
    };

    debug!(
        "[SOLVER] order {}: shipping {} units in {} packs {:?}",
        order.quantity(),
        combination.shipped_amount(),
        combination.pack_count(),
        combination.iter().rev().collect_vec()
    );

    let solution = Solution { order, combination };
    debug_assert!(assertions::solution_is_feasible(catalog, &solution));
    Ok(solution)
}

/// Preferred combination shipping the first reachable amount in `from..len`, in units.
/// `len - 1` must be reachable.
fn cover_by_table(reduction: &Reduction, from: u64, len: u64) -> Combination {
    let table = ReachTable::build(&reduction.sizes, len as usize);
    let amount = table
        .first_reachable(from as usize)
        .unwrap_or(len as usize - 1);

    table
        .decompose(amount)
        .map(|idx| (reduction.pack_size(idx), 1))
        .collect()
}

/// Smallest shippable amount of at least `n_units`, in units.
///
/// Amounts shipped by packs other than the largest one are grouped by their class modulo the
/// largest size. Adding largest packs keeps the class, so every amount at or above the smallest
/// one of its class is shippable.
fn min_shippable(reduction: &Reduction, n_units: u64) -> u64 {
    let max = reduction.max();
    let edges = reduction.sizes[..reduction.max_idx()]
        .iter()
        .map(|&size| (size, vec![size]))
        .collect_vec();
    let amounts = ResidueTable::build(max as usize, 1, &edges);

    (0..max as usize)
        .filter_map(|class| amounts.cost(class))
        .map(|cost| match cost[0] {
            smallest if smallest >= n_units => smallest,
            smallest => smallest + (n_units - smallest).div_ceil(max) * max,
        })
        .fold(n_units.div_ceil(max) * max, u64::min)
}

/// Preferred combination shipping exactly `amount` units, found through the classes modulo the
/// largest size. `None` if the cheapest packs of the class of `amount` add up to more than
/// `amount`.
///
/// Shipping `amount` with packs other than the largest summing to `s` takes `(amount - s) / max`
/// largest packs, so the total pack count is `(amount + sum(max - size)) / max`. Per class, the
/// cost vector is `sum(max - size)`, then for every non-largest size, from the largest down, the
/// number of packs of that size or smaller. Its minimum is the fewest packs holding the most of
/// the largest size, then of the next largest, and so on.
fn cover_by_class(reduction: &Reduction, amount: u64) -> Option<Combination> {
    let max = reduction.max();
    let n_fillers = reduction.max_idx();
    let edges = reduction.sizes[..n_fillers]
        .iter()
        .enumerate()
        .map(|(idx, &size)| {
            let cost = std::iter::once(max - size)
                .chain((0..n_fillers).rev().map(|tier| u64::from(idx <= tier)))
                .collect_vec();
            (size, cost)
        })
        .collect_vec();
    let classes = ResidueTable::build(max as usize, n_fillers + 1, &edges);

    let fillers = classes.decompose((amount % max) as usize).collect_vec();
    let filled: u64 = fillers.iter().map(|&idx| reduction.sizes[idx]).sum();
    let n_largest = amount.checked_sub(filled)? / max;

    let combination = fillers
        .into_iter()
        .map(|idx| (reduction.pack_size(idx), 1))
        .chain(std::iter::once((reduction.pack_size(reduction.max_idx()), n_largest)))
        .collect();
    Some(combination)
}
