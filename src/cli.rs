use crate::config::Config;
use crate::transform::{parse_subseq, SubseqRange, TransformFlags};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert FASTA records to tab-delimited rows: header, sequence, extra columns
    Fasta2tab(Fasta2TabArgs),

    /// Convert header<TAB>sequence rows back to FASTA
    Tab2fasta(Tab2FastaArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct Fasta2TabArgs {
    /// Input FASTA files, optionally compressed (omit or use '-' for stdin)
    pub files: Vec<PathBuf>,

    /// Reverse the sequence
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Complement the sequence
    #[arg(short = 'c', long = "complement")]
    pub complement: bool,

    /// Reverse complement the sequence (overrides -r and -c)
    #[arg(long = "reversecomplement", visible_alias = "rc")]
    pub reverse_complement: bool,

    /// Keep only positions START..END, 1-based inclusive; negative values count
    /// from the end, either side may be empty (e.g. 2,7  ,7  -3,  -3,-2)
    #[arg(
        long = "subseq",
        visible_alias = "sub",
        value_name = "RANGE",
        allow_hyphen_values = true,
        value_parser = parse_subseq
    )]
    pub subseq: Option<SubseqRange>,

    /// Remove every character that is not a letter (gaps, digits, symbols)
    #[arg(short = 't', long = "trim")]
    pub trim: bool,

    /// Print the sequence in lower case
    #[arg(long = "lowercase", visible_alias = "lc")]
    pub lowercase: bool,

    /// Print the sequence in upper case (ignored with --lowercase)
    #[arg(long = "uppercase", visible_alias = "uc")]
    pub uppercase: bool,

    /// Append the sequence length
    #[arg(short = 'l', long = "length")]
    pub length: bool,

    /// Append the number of letters in the sequence
    #[arg(long = "length2", visible_alias = "l2")]
    pub length2: bool,

    /// Append the content of each base set, e.g. --bc GC or --bc G,C
    #[arg(
        long = "bc",
        value_name = "SPEC",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub base_contents: Vec<String>,

    /// Append GC content (replaces --bc)
    #[arg(long = "gc")]
    pub gc: bool,

    /// Decimal places for content columns [default: from config, else 4]
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,
}

impl Fasta2TabArgs {
    pub fn flags(&self, config: &Config) -> TransformFlags {
        TransformFlags {
            reverse: self.reverse,
            complement: self.complement,
            reverse_complement: self.reverse_complement,
            subseq: self.subseq,
            trim: self.trim,
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            length: self.length,
            length2: self.length2,
            base_contents: self.base_contents.clone(),
            gc: self.gc,
            precision: Some(self.precision.unwrap_or(config.precision)),
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct Tab2FastaArgs {
    /// Input tables, optionally compressed (omit or use '-' for stdin)
    pub files: Vec<PathBuf>,

    /// Residues per FASTA line, 0 for a single line [default: from config, else 60]
    #[arg(short = 'w', long = "line-width", value_name = "N")]
    pub line_width: Option<usize>,
}

/// Multi-letter options that are also accepted with a single dash.
const LEGACY_FLAGS: &[&str] = &["rc", "sub", "lc", "uc", "l2", "bc", "gc"];

/// Options whose next argument is their value, after legacy rewriting.
const VALUE_OPTIONS: &[&str] = &[
    "--bc",
    "--subseq",
    "--sub",
    "--precision",
    "-w",
    "--line-width",
];

/// Rewrite `-rc`, `-sub 2,7`, `-l2`, ... into their `--` spellings so the
/// short forms users know from other FASTA tools keep working. Values of
/// options (`--bc -gc`) and everything after `--` are left alone.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut past_separator = false;
    let mut expects_value = false;

    for arg in args.into_iter().map(Into::<OsString>::into) {
        if past_separator || std::mem::take(&mut expects_value) {
            normalized.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if text == "--" {
            past_separator = true;
            normalized.push(arg);
            continue;
        }

        let rewritten = match text.strip_prefix('-') {
            Some(rest) => {
                let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                if LEGACY_FLAGS.contains(&name) {
                    OsString::from(format!("-{}", text))
                } else {
                    arg
                }
            }
            None => arg,
        };
        if let Some(text) = rewritten.to_str() {
            expects_value = VALUE_OPTIONS.contains(&text);
        }
        normalized.push(rewritten);
    }

    normalized
}
