use crate::cli::Fasta2TabArgs;
use crate::config::Config;
use crate::sequence_processor::readers::FastaReader;
use crate::sequence_processor::{ProcessingStats, Record, RecordProcessor, RecordReader};
use crate::transform::{transform_record, TransformOptions};
use crate::utils::input::Input;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::Result;
use indicatif::ProgressBar;
use std::io::{self, BufWriter, Write};

/// Writes one tab-separated row per record.
pub struct TableWriter<'a, W: Write> {
    out: W,
    options: &'a TransformOptions,
    progress: ProgressBar,
    done: u64,
}

impl<'a, W: Write> TableWriter<'a, W> {
    pub fn new(out: W, options: &'a TransformOptions, progress: ProgressBar) -> Self {
        Self {
            out,
            options,
            progress,
            done: 0,
        }
    }
}

impl<W: Write> RecordProcessor for TableWriter<'_, W> {
    fn process_record(&mut self, record: &Record) -> Result<()> {
        let fields = transform_record(record, self.options);
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b"\t")?;
            }
            self.out.write_all(field)?;
        }
        self.out.write_all(b"\n")?;
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

/// Convert every input, in order, into table rows written to `out`.
pub fn fasta_to_table<W: Write>(
    inputs: &[Input],
    options: &TransformOptions,
    out: W,
    progress: ProgressBar,
) -> Result<ProcessingStats> {
    let mut writer = TableWriter::new(out, options, progress);
    let mut total = ProcessingStats::default();

    for input in inputs {
        log::debug!("Reading FASTA from {}", input);
        let mut reader = FastaReader::new(input)?;
        let stats = reader.read_records(&mut writer)?;
        log::debug!("{}: {} records", input, stats.processed);
        total.merge(&stats);
        writer.done = total.processed;
    }
    writer.finalize()?;

    Ok(total)
}

pub fn run(args: Fasta2TabArgs, config: &Config) -> Result<()> {
    let options = TransformOptions::from_flags(&args.flags(config));
    log::debug!("Resolved options: {}", options.describe());

    let inputs = Input::from_paths(&args.files);
    let progress = ProgressBarBuilder::new("Converting FASTA")
        .with_tick()
        .build()?;

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let stats = fasta_to_table(&inputs, &options, out, progress.clone())?;

    progress.finish_and_clear();
    log::info!(
        "Converted {} records from {} input(s)",
        stats.processed,
        inputs.len()
    );
    Ok(())
}
