use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::PackSize;

/// Set of orders to be fulfilled from one catalog of pack sizes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    /// Available pack sizes
    pub pack_sizes: Vec<PackSize>,
    /// Requested order quantities. Kept signed, non-positive quantities are rejected by the solver.
    #[serde(default)]
    pub orders: Vec<i64>,
}

/// Packs chosen to fulfill a single order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtSolution {
    /// The ordered quantity
    pub order_size: u64,
    /// Pack size -> number of packs, sizes with zero packs are omitted
    pub packs: BTreeMap<PackSize, u64>,
    /// Total number of units shipped
    pub shipped_amount: u64,
    /// Total number of packs shipped
    pub pack_count: u64,
    /// Units shipped in excess of the ordered quantity
    pub overshoot: u64,
}

/// Order the solver refused to solve
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtRejection {
    /// The requested quantity, as given
    pub order_size: i64,
    /// Human readable reason
    pub reason: String,
}
