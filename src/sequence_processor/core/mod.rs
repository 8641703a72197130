pub(crate) mod processor;
pub(crate) mod reader;
pub(crate) mod record;
pub(crate) mod stats;

pub use processor::RecordProcessor;
pub use reader::RecordReader;
pub use record::Record;
pub use stats::ProcessingStats;
