pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod sequence_processor;
pub mod transform;
pub mod utils;

// Re-export main API
pub use error::ConfigError;
pub use sequence_processor::Record;
pub use transform::{transform_record, TransformFlags, TransformOptions};
