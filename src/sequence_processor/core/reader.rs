use super::processor::RecordProcessor;
use super::stats::ProcessingStats;
use anyhow::Result;

pub trait RecordReader {
    /// Feed every record of the source to `processor`, in source order.
    fn read_records<P: RecordProcessor>(&mut self, processor: &mut P) -> Result<ProcessingStats>;
}
