use thiserror::Error;

/// Invalid or contradictory option values, detected before any record is read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid subsequence range '{0}': expected [-]INT,[-]INT with either side optional (e.g. 2,7 or -3,)")]
    MalformedRange(String),

    #[error("invalid subsequence range '{spec}': end ({end}) is before start ({start})")]
    EndBeforeStart { spec: String, start: i64, end: i64 },
}
