//! Per-record transformation from a FASTA record to a table row.
//!
//! Flags are resolved once into [`TransformOptions`]; precedence between
//! overlapping flags is settled there, so [`transform_record`] only follows
//! the resolved variants.

pub mod sequence;
pub mod subseq;

pub use sequence::BaseSet;
pub use subseq::{parse_subseq, SubseqRange};

use crate::sequence_processor::core::Record;
use sequence::{
    complement_in_place, count_letters, format_content, reverse_complement_in_place,
    trim_non_letters,
};

/// Replacement for tab characters inside headers.
pub const TAB_TOKEN: &[u8] = b"__tab__";

pub const DEFAULT_PRECISION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Unchanged,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Unchanged,
    Reverse,
    Complement,
    ReverseComplement,
}

#[derive(Debug, Clone, Default)]
pub enum ExtraColumns {
    #[default]
    None,
    Gc,
    BaseContents(Vec<BaseSet>),
}

/// The raw switches as they come from the command line.
#[derive(Debug, Clone, Default)]
pub struct TransformFlags {
    pub reverse: bool,
    pub complement: bool,
    pub reverse_complement: bool,
    pub subseq: Option<SubseqRange>,
    pub trim: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub length: bool,
    pub length2: bool,
    pub base_contents: Vec<String>,
    pub gc: bool,
    pub precision: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub trim: bool,
    pub subseq: Option<SubseqRange>,
    pub orientation: Orientation,
    pub case: CaseMode,
    pub report_length: bool,
    pub report_letter_count: bool,
    pub extra: ExtraColumns,
    pub precision: usize,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            trim: false,
            subseq: None,
            orientation: Orientation::Unchanged,
            case: CaseMode::Unchanged,
            report_length: false,
            report_letter_count: false,
            extra: ExtraColumns::None,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl TransformOptions {
    pub fn from_flags(flags: &TransformFlags) -> Self {
        let orientation = match (flags.reverse_complement, flags.reverse, flags.complement) {
            (true, _, _) | (false, true, true) => Orientation::ReverseComplement,
            (false, true, false) => Orientation::Reverse,
            (false, false, true) => Orientation::Complement,
            (false, false, false) => Orientation::Unchanged,
        };

        let case = if flags.lowercase {
            CaseMode::Lower
        } else if flags.uppercase {
            CaseMode::Upper
        } else {
            CaseMode::Unchanged
        };

        let specs: Vec<BaseSet> = flags
            .base_contents
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(BaseSet::new)
            .collect();
        let extra = if flags.gc {
            ExtraColumns::Gc
        } else if !specs.is_empty() {
            ExtraColumns::BaseContents(specs)
        } else {
            ExtraColumns::None
        };

        Self {
            trim: flags.trim,
            subseq: flags.subseq,
            orientation,
            case,
            report_length: flags.length,
            report_letter_count: flags.length2,
            extra,
            precision: flags.precision.unwrap_or(DEFAULT_PRECISION),
        }
    }

    /// One-line summary of the resolved options, for logging.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.trim {
            parts.push("trim".to_string());
        }
        if let Some(range) = &self.subseq {
            parts.push(format!("subseq {}", range));
        }
        if self.orientation != Orientation::Unchanged {
            parts.push(format!("{:?}", self.orientation).to_lowercase());
        }
        if self.case != CaseMode::Unchanged {
            parts.push(format!("{:?}case", self.case).to_lowercase());
        }
        if self.report_length {
            parts.push("length".to_string());
        }
        if self.report_letter_count {
            parts.push("length2".to_string());
        }
        match &self.extra {
            ExtraColumns::None => {}
            ExtraColumns::Gc => parts.push("gc".to_string()),
            ExtraColumns::BaseContents(sets) => {
                let specs: Vec<&str> = sets.iter().map(BaseSet::spec).collect();
                parts.push(format!("bc {}", specs.join(",")));
            }
        }
        if parts.is_empty() {
            "no transformation".to_string()
        } else {
            parts.join("; ")
        }
    }
}

/// Replace every tab in `header` with [`TAB_TOKEN`].
pub fn sanitize_header(header: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(header.len());
    for &b in header {
        if b == b'\t' {
            out.extend_from_slice(TAB_TOKEN);
        } else {
            out.push(b);
        }
    }
    out
}

/// Apply trimming, slicing, orientation and case changes to a sequence.
pub fn transform_sequence(seq: &[u8], options: &TransformOptions) -> Vec<u8> {
    let trimmed;
    let mut current: &[u8] = seq;
    if options.trim {
        trimmed = trim_non_letters(current);
        current = &trimmed;
    }
    if let Some(range) = &options.subseq {
        current = range.apply(current);
    }

    let mut out = current.to_vec();
    match options.orientation {
        Orientation::Unchanged => {}
        Orientation::Reverse => out.reverse(),
        Orientation::Complement => complement_in_place(&mut out),
        Orientation::ReverseComplement => reverse_complement_in_place(&mut out),
    }

    match options.case {
        CaseMode::Unchanged => {}
        CaseMode::Lower => out.make_ascii_lowercase(),
        CaseMode::Upper => out.make_ascii_uppercase(),
    }

    out
}

/// Build the output fields for one record:
/// header, sequence, then the requested computed columns.
pub fn transform_record(record: &Record, options: &TransformOptions) -> Vec<Vec<u8>> {
    let header = sanitize_header(&record.header);
    let seq = transform_sequence(&record.sequence, options);

    let mut computed = Vec::new();
    if options.report_length {
        computed.push(seq.len().to_string());
    }
    if options.report_letter_count {
        let letters = if options.trim {
            seq.len()
        } else {
            count_letters(&seq)
        };
        computed.push(letters.to_string());
    }
    match &options.extra {
        ExtraColumns::None => {}
        ExtraColumns::Gc => {
            computed.push(format_content(BaseSet::gc().content(&seq), options.precision));
        }
        ExtraColumns::BaseContents(sets) => {
            for set in sets {
                computed.push(format_content(set.content(&seq), options.precision));
            }
        }
    }

    let mut fields = Vec::with_capacity(2 + computed.len());
    fields.push(header);
    fields.push(seq);
    fields.extend(computed.into_iter().map(String::into_bytes));
    fields
}
