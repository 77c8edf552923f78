use std::path::PathBuf;

use thiserror::Error;

/// Failures of the offline table generator.
///
/// Any of these aborts a run before a single output file is replaced.
#[derive(Error, Debug)]
pub enum LutGenError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse generator config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("{table} sample {index} at position {position} is not finite")]
    NonFiniteSample {
        table: &'static str,
        index: usize,
        position: f64,
    },
    #[error("invalid generator config: {reason}")]
    InvalidConfig { reason: String },
}
