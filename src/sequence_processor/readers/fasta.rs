use crate::sequence_processor::core::*;
use crate::utils::input::{open_input, Input};
use anyhow::{Context, Result};
use seq_io::fasta::{self, Record as _};
use std::io::Read;

pub struct FastaReader {
    reader: fasta::Reader<Box<dyn Read>>,
    source: String,
}

impl FastaReader {
    pub fn new(input: &Input) -> Result<Self> {
        let inner = open_input(input)?;
        Ok(Self::from_reader(inner, input.to_string()))
    }

    pub fn from_reader(inner: Box<dyn Read>, source: impl Into<String>) -> Self {
        Self {
            reader: fasta::Reader::new(inner),
            source: source.into(),
        }
    }

    fn create_record_from_ref(record: &fasta::RefRecord) -> Record {
        let head = record.head();
        let head = head.strip_suffix(b"\r").unwrap_or(head);

        let mut sequence = Vec::with_capacity(record.seq().len());
        for line in record.seq_lines() {
            sequence.extend(line.iter().filter(|b| !b.is_ascii_whitespace()));
        }

        Record::new(head.to_vec(), sequence)
    }
}

impl RecordReader for FastaReader {
    fn read_records<P: RecordProcessor>(&mut self, processor: &mut P) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();

        while let Some(result) = self.reader.next() {
            let ref_record = result
                .with_context(|| format!("Failed to parse FASTA record from {}", self.source))?;
            let record = Self::create_record_from_ref(&ref_record);
            processor.process_record(&record)?;
            stats.processed += 1;

            if stats.processed % 1000 == 0 {
                processor.update_progress(&stats);
            }
        }
        processor.update_progress(&stats);

        Ok(stats)
    }
}
