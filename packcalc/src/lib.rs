use std::sync::LazyLock;
use std::time::Instant;

pub mod batch;
pub mod config;
pub mod io;

/// Start of the process, used as reference for log timestamps and run times
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
