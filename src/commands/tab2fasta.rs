use crate::cli::Tab2FastaArgs;
use crate::config::Config;
use crate::sequence_processor::readers::TabularReader;
use crate::sequence_processor::{ProcessingStats, Record, RecordProcessor, RecordReader};
use crate::utils::input::Input;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::Result;
use indicatif::ProgressBar;
use std::io::{self, BufWriter, Write};

/// Writes records as FASTA, wrapping sequences at `line_width` (0 = no wrap).
pub struct FastaWriter<W: Write> {
    out: W,
    line_width: usize,
    progress: ProgressBar,
    done: u64,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(out: W, line_width: usize, progress: ProgressBar) -> Self {
        Self {
            out,
            line_width,
            progress,
            done: 0,
        }
    }
}

impl<W: Write> RecordProcessor for FastaWriter<W> {
    fn process_record(&mut self, record: &Record) -> Result<()> {
        self.out.write_all(b">")?;
        self.out.write_all(&record.header)?;
        self.out.write_all(b"\n")?;

        if record.sequence.is_empty() {
            return Ok(());
        }
        if self.line_width == 0 {
            self.out.write_all(&record.sequence)?;
            self.out.write_all(b"\n")?;
        } else {
            for chunk in record.sequence.chunks(self.line_width) {
                self.out.write_all(chunk)?;
                self.out.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    fn update_progress(&mut self, stats: &ProcessingStats) {
        self.progress.set_position(self.done + stats.processed);
    }

    fn finalize(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

pub fn table_to_fasta<W: Write>(
    inputs: &[Input],
    line_width: usize,
    out: W,
    progress: ProgressBar,
) -> Result<ProcessingStats> {
    let mut writer = FastaWriter::new(out, line_width, progress);
    let mut total = ProcessingStats::default();

    for input in inputs {
        log::debug!("Reading table from {}", input);
        let mut reader = TabularReader::new(input)?;
        let stats = reader.read_records(&mut writer)?;
        if stats.skipped > 0 {
            log::debug!("{}: skipped {} blank lines", input, stats.skipped);
        }
        total.merge(&stats);
        writer.done = total.processed;
    }
    writer.finalize()?;

    Ok(total)
}

pub fn run(args: Tab2FastaArgs, config: &Config) -> Result<()> {
    let line_width = args.line_width.unwrap_or(config.line_width);
    let inputs = Input::from_paths(&args.files);
    let progress = ProgressBarBuilder::new("Writing FASTA").with_tick().build()?;

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let stats = table_to_fasta(&inputs, line_width, out, progress.clone())?;

    progress.finish_and_clear();
    log::info!(
        "Wrote {} records from {} input(s)",
        stats.processed,
        inputs.len()
    );
    Ok(())
}
