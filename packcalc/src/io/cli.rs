use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use packsolver::entities::PackSize;

use crate::batch::InstanceOverrides;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance file with pack sizes and orders
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,
    /// Order quantity to solve, can be repeated
    #[arg(short, long = "order", value_name = "QUANTITY", allow_negative_numbers = true)]
    pub orders: Vec<i64>,
    /// Pack sizes to use, replacing those of the instance file and the config
    #[arg(short, long, value_name = "SIZES", value_delimiter = ',')]
    pub pack_sizes: Option<Vec<PackSize>>,
    /// Pack size to add to the catalog, can be repeated
    #[arg(long, value_name = "SIZE")]
    pub add_pack: Vec<PackSize>,
    /// Pack size to remove from the catalog, can be repeated
    #[arg(long, value_name = "SIZE")]
    pub remove_pack: Vec<PackSize>,
    /// Where to write the solutions. If undefined, they are printed to stdout
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn overrides(&self) -> InstanceOverrides {
        InstanceOverrides {
            pack_sizes: self.pack_sizes.clone(),
            add_packs: self.add_pack.clone(),
            remove_packs: self.remove_pack.clone(),
            orders: self.orders.clone(),
        }
    }
}
