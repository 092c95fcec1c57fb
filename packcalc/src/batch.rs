use std::time::Instant;

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use log::{debug, info, warn};
use packsolver::entities::{Catalog, PackSize, Solution};
use packsolver::io::ext_repr::ExtInstance;
use packsolver::io::{export_instance, export_rejection, export_solution, import_catalog};
use packsolver::util::assertions;
use packsolver::{PackSolver, SolveError};
use rayon::prelude::*;
use thousands::Separable;

use crate::config::PackCalcConfig;
use crate::io::output::CalcOutput;

/// Name given to instances assembled from the command line only
pub const CLI_INSTANCE_NAME: &str = "cli";

/// Changes to an instance requested on the command line
#[derive(Debug, Clone, Default)]
pub struct InstanceOverrides {
    /// Replaces the pack sizes of the instance file and the config
    pub pack_sizes: Option<Vec<PackSize>>,
    /// Added to the catalog after the pack sizes are resolved
    pub add_packs: Vec<PackSize>,
    /// Removed from the catalog after the additions
    pub remove_packs: Vec<PackSize>,
    /// Solved after the orders of the instance file
    pub orders: Vec<i64>,
}

/// Resolves the instance to solve.
///
/// Pack sizes come from the overrides, else from the instance file, else from the config.
/// Pack additions and removals are applied on top of that, in that order.
pub fn assemble_instance(
    file_instance: Option<ExtInstance>,
    overrides: &InstanceOverrides,
    config: &PackCalcConfig,
) -> Result<ExtInstance> {
    let (name, file_sizes, mut orders) = match file_instance {
        Some(ExtInstance {
            name,
            pack_sizes,
            orders,
        }) => (name, Some(pack_sizes), orders),
        None => (CLI_INSTANCE_NAME.to_string(), None, vec![]),
    };
    orders.extend_from_slice(&overrides.orders);

    let pack_sizes = overrides
        .pack_sizes
        .clone()
        .or(file_sizes)
        .unwrap_or_else(|| config.pack_sizes.clone());

    let mut catalog = Catalog::new(pack_sizes).context("invalid pack sizes")?;
    for &size in &overrides.add_packs {
        catalog
            .insert(size)
            .with_context(|| format!("could not add pack size {size}"))?;
    }
    for &size in &overrides.remove_packs {
        catalog
            .remove(size)
            .with_context(|| format!("could not remove pack size {size}"))?;
    }

    debug!(
        "[BATCH] instance '{name}': pack sizes {:?}, {} orders",
        catalog.sizes().collect_vec(),
        orders.len()
    );

    Ok(export_instance(&name, &catalog, &orders))
}

/// Solves all orders of the instance, independently of each other and in parallel.
/// Refused orders end up in the rejections of the output, they do not fail the batch.
pub fn solve_instance(ext_instance: &ExtInstance, config: &PackCalcConfig) -> Result<CalcOutput> {
    let catalog = import_catalog(ext_instance).context("invalid pack sizes")?;
    if catalog.is_empty() {
        warn!("[BATCH] catalog is empty, every order will be rejected");
    }
    let solver = match config.table_limit {
        Some(table_limit) => PackSolver::new(catalog).with_table_limit(table_limit),
        None => PackSolver::new(catalog),
    };

    let start = Instant::now();
    let results = match config.n_threads {
        None => solve_orders(&solver, &ext_instance.orders),
        Some(n_threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .context("could not build thread pool")?
            .install(|| solve_orders(&solver, &ext_instance.orders)),
    };
    let run_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut solutions = vec![];
    let mut rejections = vec![];
    for (quantity, result) in results {
        match result {
            Ok(solution) => {
                if config.check_solutions
                    && !assertions::solution_is_feasible(solver.catalog(), &solution)
                {
                    bail!("solution for order {quantity} failed the checks");
                }
                info!(
                    "[BATCH] order {}: {} packs, {} units shipped ({} over)",
                    quantity.separate_with_commas(),
                    solution.pack_count().separate_with_commas(),
                    solution.shipped_amount().separate_with_commas(),
                    solution.overshoot().separate_with_commas()
                );
                solutions.push(export_solution(&solution));
            }
            Err(err) => {
                warn!("[BATCH] order {quantity} rejected: {err}");
                rejections.push(export_rejection(quantity, &err));
            }
        }
    }

    info!(
        "[BATCH] {} orders solved, {} rejected in {:.3}ms",
        solutions.len().separate_with_commas(),
        rejections.len().separate_with_commas(),
        run_time_ms
    );

    Ok(CalcOutput {
        instance: ext_instance.clone(),
        solutions,
        rejections,
        config: config.clone(),
        run_time_ms,
    })
}

fn solve_orders(solver: &PackSolver, orders: &[i64]) -> Vec<(i64, Result<Solution, SolveError>)> {
    orders
        .par_iter()
        .map(|&quantity| (quantity, solver.solve(quantity)))
        .collect()
}
