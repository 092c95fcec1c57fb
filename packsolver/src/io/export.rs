use crate::entities::{Catalog, Solution};
use crate::error::SolveError;
use crate::io::ext_repr::{ExtInstance, ExtRejection, ExtSolution};

/// Exports a solution out of the library
pub fn export_solution(solution: &Solution) -> ExtSolution {
    ExtSolution {
        order_size: solution.order.quantity(),
        packs: solution.combination.iter().collect(),
        shipped_amount: solution.shipped_amount(),
        pack_count: solution.pack_count(),
        overshoot: solution.overshoot(),
    }
}

/// Exports a refused order out of the library
pub fn export_rejection(quantity: i64, err: &SolveError) -> ExtRejection {
    ExtRejection {
        order_size: quantity,
        reason: err.to_string(),
    }
}

/// Exports a catalog together with the orders solved against it
pub fn export_instance(name: &str, catalog: &Catalog, orders: &[i64]) -> ExtInstance {
    ExtInstance {
        name: name.to_string(),
        pack_sizes: catalog.sizes().collect(),
        orders: orders.to_vec(),
    }
}
