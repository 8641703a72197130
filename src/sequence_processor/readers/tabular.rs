use crate::sequence_processor::core::*;
use crate::transform::TAB_TOKEN;
use crate::utils::input::{open_input, Input};
use anyhow::{bail, Context, Result};
use std::io::{BufRead, BufReader, Read};

/// Reads `header<TAB>sequence[<TAB>...]` rows back into records.
pub struct TabularReader {
    reader: BufReader<Box<dyn Read>>,
    source: String,
}

impl TabularReader {
    pub fn new(input: &Input) -> Result<Self> {
        let inner = open_input(input)?;
        Ok(Self::from_reader(inner, input.to_string()))
    }

    pub fn from_reader(inner: Box<dyn Read>, source: impl Into<String>) -> Self {
        Self {
            reader: BufReader::new(inner),
            source: source.into(),
        }
    }

    fn create_record_from_line(&self, line: &[u8], line_number: u64) -> Result<Record> {
        let mut fields = line.splitn(3, |&b| b == b'\t');
        let header = fields.next().unwrap_or_default();
        let Some(sequence) = fields.next() else {
            bail!(
                "{}:{}: expected at least two tab-separated columns",
                self.source,
                line_number
            );
        };
        Ok(Record::new(restore_tabs(header), sequence.to_vec()))
    }
}

/// Inverse of header sanitisation: turn every `__tab__` back into a tab.
pub fn restore_tabs(header: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(header.len());
    let mut rest = header;
    while !rest.is_empty() {
        if rest.starts_with(TAB_TOKEN) {
            out.push(b'\t');
            rest = &rest[TAB_TOKEN.len()..];
        } else {
            out.push(rest[0]);
            rest = &rest[1..];
        }
    }
    out
}

impl RecordReader for TabularReader {
    fn read_records<P: RecordProcessor>(&mut self, processor: &mut P) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();
        let mut line = Vec::new();
        let mut line_number = 0u64;

        loop {
            line.clear();
            let n = self
                .reader
                .read_until(b'\n', &mut line)
                .with_context(|| format!("Failed to read from {}", self.source))?;
            if n == 0 {
                break;
            }
            line_number += 1;

            let mut content = line.as_slice();
            content = content.strip_suffix(b"\n").unwrap_or(content);
            content = content.strip_suffix(b"\r").unwrap_or(content);
            if content.iter().all(|b| b.is_ascii_whitespace()) {
                stats.skipped += 1;
                continue;
            }

            let record = self.create_record_from_line(content, line_number)?;
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
