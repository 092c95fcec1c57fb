use anyhow::Result;
use clap::Parser as ClapParser;
use log::{info, warn};
use packcalc::batch;
use packcalc::config::PackCalcConfig;
use packcalc::io;
use packcalc::io::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackCalcConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    info!("[MAIN] Successfully parsed PackCalcConfig: {config:?}");

    let file_instance = match &args.input_file {
        Some(input_file) => Some(io::read_instance(input_file)?),
        None => None,
    };

    let ext_instance = batch::assemble_instance(file_instance, &args.overrides(), &config)?;
    if ext_instance.orders.is_empty() {
        warn!("[MAIN] No orders to solve, use --order or an input file with orders");
    }

    let output = batch::solve_instance(&ext_instance, &config)?;

    match &args.output_file {
        Some(output_file) => io::write_json(&output, output_file),
        None => io::print_json(&output),
    }
}
