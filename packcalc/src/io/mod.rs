use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use packsolver::io::ext_repr::ExtInstance;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::EPOCH;
use crate::config::PackCalcConfig;

pub mod cli;
pub mod output;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse file: {}", path.display()))
}

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    read_json(path).context("incorrect instance file format")
}

pub fn read_config(path: &Path) -> Result<PackCalcConfig> {
    read_json(path).context("incorrect config file format")
}

pub fn write_json(value: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to {:?}",
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    );
    Ok(())
}

/// Writes the value as pretty JSON to stdout.
/// Logging goes to stderr, so the output stays parseable.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("could not write solution")?;
    writeln!(stdout)?;
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        // stdout is reserved for the solution output
        .chain(std::io::stderr())
        .apply()?;
    info!("[IO] time: {}", jiff::Timestamp::now());
    Ok(())
}
