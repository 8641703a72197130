//! Byte-level sequence primitives used by the record transformer.

use bio::alphabets::dna;

/// Keep only ASCII Latin letters, preserving order.
pub fn trim_non_letters(seq: &[u8]) -> Vec<u8> {
    seq.iter().copied().filter(u8::is_ascii_alphabetic).collect()
}

pub fn count_letters(seq: &[u8]) -> usize {
    seq.iter().filter(|b| b.is_ascii_alphabetic()).count()
}

/// Complement every base in place. IUPAC ambiguity codes are paired, case is
/// preserved and unknown symbols are left untouched.
pub fn complement_in_place(seq: &mut [u8]) {
    for base in seq.iter_mut() {
        *base = dna::complement(*base);
    }
}

pub fn reverse_complement_in_place(seq: &mut [u8]) {
    complement_in_place(seq);
    seq.reverse();
}

/// A case-insensitive set of symbols, e.g. `GC` or `AT`.
#[derive(Debug, Clone)]
pub struct BaseSet {
    spec: String,
    members: [bool; 256],
}

impl BaseSet {
    pub fn new(spec: &str) -> Self {
        let mut members = [false; 256];
        for b in spec.bytes() {
            members[b.to_ascii_uppercase() as usize] = true;
            members[b.to_ascii_lowercase() as usize] = true;
        }
        Self {
            spec: spec.to_string(),
            members,
        }
    }

    pub fn gc() -> Self {
        Self::new("GC")
    }

    pub fn spec(&self) -> &str {
        &self.spec
    }

    pub fn contains(&self, base: u8) -> bool {
        self.members[base as usize]
    }

    pub fn count_in(&self, seq: &[u8]) -> usize {
        seq.iter().filter(|&&b| self.contains(b)).count()
    }

    /// Fraction of `seq` made of members of this set; `None` for an empty
    /// sequence.
    pub fn content(&self, seq: &[u8]) -> Option<f64> {
        if seq.is_empty() {
            return None;
        }
        Some(self.count_in(seq) as f64 / seq.len() as f64)
    }
}

/// Render a content value the way it appears in the output table.
pub fn format_content(content: Option<f64>, precision: usize) -> String {
    match content {
        Some(value) => format!("{:.*}", precision, value),
        None => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revcomp(seq: &[u8]) -> Vec<u8> {
        let mut out = seq.to_vec();
        reverse_complement_in_place(&mut out);
        out
    }

    #[test]
    fn trim_keeps_only_letters() {
        assert_eq!(trim_non_letters(b"AC-GT 12.n*x"), b"ACGTnx".to_vec());
        assert_eq!(trim_non_letters(b""), Vec::<u8>::new());
    }

    #[test]
    fn trim_is_idempotent() {
        let once = trim_non_letters(b"--AC..g t\tN9");
        assert_eq!(trim_non_letters(&once), once);
    }

    #[test]
    fn letters_are_counted_without_touching_input() {
        let seq = b"AC-GT123".to_vec();
        assert_eq!(count_letters(&seq), 4);
        assert_eq!(seq, b"AC-GT123".to_vec());
    }

    #[test]
    fn complement_preserves_case_and_unknowns() {
        let mut seq = b"ACGTacgtNn-*".to_vec();
        complement_in_place(&mut seq);
        assert_eq!(seq, b"TGCAtgcaNn-*".to_vec());
    }

    #[test]
    fn reverse_complement_is_an_involution() {
        for seq in [
            &b"ACGTTGCAAN"[..],
            b"acgtnNNAcG",
            b"",
            b"RYKMSWBDHVN",
            b"ryKmSwbdhv",
        ] {
            assert_eq!(revcomp(&revcomp(seq)), seq.to_vec());
        }
    }

    #[test]
    fn reverse_complement_handles_ambiguity_codes() {
        assert_eq!(revcomp(b"ACGTN"), b"NACGT".to_vec());
        assert_eq!(revcomp(b"RYKM"), b"KMRY".to_vec());
        assert_eq!(revcomp(b"AcGt"), b"aCgT".to_vec());
    }

    #[test]
    fn gc_content() {
        let gc = BaseSet::gc();
        assert_eq!(gc.content(b"GGCC"), Some(1.0));
        assert_eq!(gc.content(b"ggcc"), Some(1.0));
        assert_eq!(gc.content(b"GATTACA"), Some(2.0 / 7.0));
        assert_eq!(gc.content(b""), None);
    }

    #[test]
    fn base_set_counts_each_letter_once() {
        let set = BaseSet::new("aAt");
        assert_eq!(set.count_in(b"AATTGC"), 4);
        assert_eq!(set.spec(), "aAt");
    }

    #[test]
    fn content_formatting() {
        assert_eq!(format_content(Some(1.0), 4), "1.0000");
        assert_eq!(format_content(Some(0.5), 2), "0.50");
        assert_eq!(format_content(Some(1.0 / 3.0), 0), "0");
        assert_eq!(format_content(None, 4), "0");
    }
}
