use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The check latency override was present but not a millisecond count.
    #[error("Invalid check latency {value:?}: {source}")]
    InvalidLatency {
        value: String,
        source: ParseIntError,
    },
}
