use log::error;

use crate::entities::{Catalog, Combination, Order, Solution};

//Various checks to verify correctness of solver output
//Used in debug_assert!() blocks

/// Ships at least the ordered quantity
pub fn combination_covers(order: Order, combination: &Combination) -> bool {
    combination.covers(order.quantity())
}

/// Only uses pack sizes from the catalog, each with a non-zero count
pub fn combination_uses_catalog(catalog: &Catalog, combination: &Combination) -> bool {
    combination
        .iter()
        .all(|(size, count)| count > 0 && catalog.contains(size))
}

/// Overshoots by less than the largest pack size.
/// Covering with largest packs only never does worse, so any optimal combination satisfies this.
pub fn overshoot_below_largest(catalog: &Catalog, order: Order, combination: &Combination) -> bool {
    match catalog.largest() {
        Some(max) => combination.overshoot(order.quantity()) < max as u64,
        None => false,
    }
}

pub fn solution_is_feasible(catalog: &Catalog, solution: &Solution) -> bool {
    let Solution { order, combination } = solution;

    let checks = [
        ("covers order", combination_covers(*order, combination)),
        (
            "uses catalog",
            combination_uses_catalog(catalog, combination),
        ),
        (
            "overshoot below largest pack",
            overshoot_below_largest(catalog, *order, combination),
        ),
    ];

    for (name, passed) in checks {
        if !passed {
            error!(
                "solution for order {} failed check '{name}': {:?}",
                order.quantity(),
                combination
            );
            return false;
        }
    }
    true
}
