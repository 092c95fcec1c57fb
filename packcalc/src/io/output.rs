use packsolver::io::ext_repr::{ExtInstance, ExtRejection, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::PackCalcConfig;

/// Everything a run produced: the instance as solved, its solutions and the refused orders
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CalcOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solutions: Vec<ExtSolution>,
    pub rejections: Vec<ExtRejection>,
    pub config: PackCalcConfig,
    /// Time it took to solve all orders, in milliseconds
    pub run_time_ms: f64,
}
