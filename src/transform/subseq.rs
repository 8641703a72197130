use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A `--subseq` window: 1-based inclusive bounds, negative values counted
/// from the end of the sequence, either side optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubseqRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl SubseqRange {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Resolve the range against a sequence of length `len`, returning a
    /// half-open 0-based window. An empty window is returned as `from == to`.
    pub fn resolve(&self, len: usize) -> (usize, usize) {
        let len = len as i64;

        let from = match self.start {
            None => 0,
            Some(s) if s > 0 => s - 1,
            Some(s) if s < 0 => len + s,
            Some(_) => 0,
        };
        let to = match self.end {
            None => len,
            Some(e) if e < 0 => len + e + 1,
            Some(e) => e,
        };

        let from = from.clamp(0, len) as usize;
        let to = to.clamp(0, len) as usize;
        if from >= to {
            (from, from)
        } else {
            (from, to)
        }
    }

    pub fn apply<'a>(&self, seq: &'a [u8]) -> &'a [u8] {
        let (from, to) = self.resolve(seq.len());
        &seq[from..to]
    }
}

fn parse_bound(token: &str) -> Option<Option<i64>> {
    if token.is_empty() {
        return Some(None);
    }
    let (negative, digits) = match token.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Positions beyond i64 are clamped to the sequence ends anyway.
    let value = token.parse::<i64>().unwrap_or(if negative { i64::MIN } else { i64::MAX });
    Some(Some(value))
}

impl FromStr for SubseqRange {
    type Err = ConfigError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedRange(spec.to_string());

        let (start, end) = spec.split_once(',').ok_or_else(malformed)?;
        let start = parse_bound(start).ok_or_else(malformed)?;
        let end = parse_bound(end).ok_or_else(malformed)?;

        if let (Some(s), Some(e)) = (start, end) {
            if e < s {
                return Err(ConfigError::EndBeforeStart {
                    spec: spec.to_string(),
                    start: s,
                    end: e,
                });
            }
        }

        Ok(SubseqRange { start, end })
    }
}

impl fmt::Display for SubseqRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.start {
            write!(f, "{}", s)?;
        }
        f.write_str(",")?;
        if let Some(e) = self.end {
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

/// clap value parser for `--subseq`.
pub fn parse_subseq(spec: &str) -> Result<SubseqRange, ConfigError> {
    spec.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ: &[u8] = b"ACGAGACGTA";

    fn sub(spec: &str) -> String {
        let range: SubseqRange = spec.parse().unwrap();
        String::from_utf8(range.apply(SEQ).to_vec()).unwrap()
    }

    #[test]
    fn documented_windows() {
        assert_eq!(sub("2,7"), "CGAGAC");
        assert_eq!(sub("2,2"), "C");
        assert_eq!(sub(",7"), "ACGAGAC");
        assert_eq!(sub("2,"), "CGAGACGTA");
        assert_eq!(sub("-3,"), "GTA");
        assert_eq!(sub("-3,-2"), "GT");
        assert_eq!(sub(",-3"), "ACGAGACG");
    }

    #[test]
    fn open_range_is_whole_sequence() {
        assert_eq!(sub(","), "ACGAGACGTA");
        assert_eq!(sub(",-1"), "ACGAGACGTA");
    }

    #[test]
    fn windows_past_the_ends_are_clamped() {
        assert_eq!(sub("8,100"), "GTA");
        assert_eq!(sub("-100,2"), "AC");
        assert_eq!(sub("20,"), "");
        assert_eq!(SubseqRange::new(Some(5), Some(-8)).apply(SEQ), b"");
        assert_eq!(
            "5,-8".parse::<SubseqRange>(),
            Err(ConfigError::EndBeforeStart {
                spec: "5,-8".to_string(),
                start: 5,
                end: -8
            })
        );
    }

    #[test]
    fn oversized_bounds_saturate() {
        assert_eq!(sub("1,99999999999999999999"), "ACGAGACGTA");
        assert_eq!(sub("-99999999999999999999,2"), "AC");
        assert_eq!(
            "1,99999999999999999999".parse::<SubseqRange>(),
            Ok(SubseqRange::new(Some(1), Some(i64::MAX)))
        );
        assert!(matches!(
            "99999999999999999999,1".parse::<SubseqRange>(),
            Err(ConfigError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn empty_sequence_yields_empty_window() {
        let range: SubseqRange = "2,7".parse().unwrap();
        assert_eq!(range.apply(b""), b"");
        assert_eq!(range.resolve(0), (0, 0));
    }

    #[test]
    fn rejects_end_before_start() {
        assert_eq!(
            "7,2".parse::<SubseqRange>(),
            Err(ConfigError::EndBeforeStart {
                spec: "7,2".to_string(),
                start: 7,
                end: 2
            })
        );
        assert!("-2,-3".parse::<SubseqRange>().is_err());
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["", "7", "a,3", "1,2,3", "--1,", "+2,4", "1 ,4", "-,", "2:7"] {
            assert_eq!(
                bad.parse::<SubseqRange>(),
                Err(ConfigError::MalformedRange(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_matches_input_form() {
        for spec in ["2,7", ",7", "-3,", ","] {
            assert_eq!(spec.parse::<SubseqRange>().unwrap().to_string(), spec);
        }
    }
}
