use packsolver::entities::PackSize;
use serde::{Deserialize, Serialize};

/// Pack sizes offered when neither the instance nor the command line provides any
pub const DEFAULT_PACK_SIZES: [PackSize; 5] = [250, 500, 1000, 2000, 5000];

/// Configuration for the pack calculator
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PackCalcConfig {
    /// Pack sizes to use when neither the instance file nor `--pack-sizes` defines them
    pub pack_sizes: Vec<PackSize>,
    /// Run the solution checks on every solution, also in release builds
    #[serde(default)]
    pub check_solutions: bool,
    /// Number of threads to solve orders on. If undefined, one per available core
    #[serde(default)]
    pub n_threads: Option<usize>,
    /// Bound on the table entries the solver allocates per order. If undefined, the solver default
    #[serde(default)]
    pub table_limit: Option<u64>,
}

impl Default for PackCalcConfig {
    fn default() -> Self {
        Self {
            pack_sizes: DEFAULT_PACK_SIZES.to_vec(),
            check_solutions: false,
            n_threads: None,
            table_limit: None,
        }
    }
}
