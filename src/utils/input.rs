use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Shortest prefix niffler needs to recognise a compression format.
const SNIFF_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    /// `-` names standard input; no paths at all means standard input too.
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Input> {
        if paths.is_empty() {
            return vec![Input::Stdin];
        }
        paths
            .iter()
            .map(|p| {
                if p.as_path() == Path::new("-") {
                    Input::Stdin
                } else {
                    Input::Path(p.clone())
                }
            })
            .collect()
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Open an input, transparently decompressing gzip/bzip2/xz streams.
pub fn open_input(input: &Input) -> Result<Box<dyn Read>> {
    let raw: Box<dyn Read> = match input {
        Input::Stdin => Box::new(io::stdin()),
        Input::Path(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        ),
    };
    decompress(raw).with_context(|| format!("Failed to read {}", input))
}

pub(crate) fn decompress(mut raw: Box<dyn Read>) -> Result<Box<dyn Read>> {
    // Pipes may deliver the magic bytes over several reads.
    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    (&mut raw)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut prefix)?;
    let complete = prefix.len() == SNIFF_LEN;
    let stream = BufReader::with_capacity(1024 * 1024, Cursor::new(prefix).chain(raw));

    // niffler refuses streams shorter than its magic-number window; such
    // inputs cannot be compressed, so hand them through unchanged.
    if !complete {
        return Ok(Box::new(stream));
    }

    let (reader, format) = niffler::get_reader(Box::new(stream))?;
    log::debug!("Detected input compression: {:?}", format);
    Ok(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(data: &'static [u8]) -> Vec<u8> {
        let mut out = Vec::new();
        decompress(Box::new(data))
            .unwrap()
            .read_to_end(&mut out)
            .unwrap();
        out
    }

    #[test]
    fn dash_and_no_paths_mean_stdin() {
        assert_eq!(Input::from_paths(&[]), vec![Input::Stdin]);
        assert_eq!(
            Input::from_paths(&[PathBuf::from("a.fa"), PathBuf::from("-")]),
            vec![Input::Path(PathBuf::from("a.fa")), Input::Stdin]
        );
    }

    #[test]
    fn plain_and_short_inputs_pass_through() {
        assert_eq!(read_all(b">s1\nACGTACGT\n"), b">s1\nACGTACGT\n".to_vec());
        assert_eq!(read_all(b">a\n"), b">a\n".to_vec());
        assert_eq!(read_all(b""), Vec::<u8>::new());
    }

    /// Hands out one byte per `read` call, like a slow pipe.
    struct Trickle(Vec<u8>, usize);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.1 >= self.0.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[self.1];
            self.1 += 1;
            Ok(1)
        }
    }

    #[test]
    fn gzip_arriving_byte_by_byte_is_decompressed() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">s\nACGT\n").unwrap();
        let gz = encoder.finish().unwrap();

        let mut out = Vec::new();
        decompress(Box::new(Trickle(gz, 0)))
            .unwrap()
            .read_to_end(&mut out)
            .unwrap();
        assert_eq!(out, b">s\nACGT\n".to_vec());
    }

    #[test]
    fn plain_input_arriving_byte_by_byte_is_unchanged() {
        let mut out = Vec::new();
        decompress(Box::new(Trickle(b">s\nAC\n".to_vec(), 0)))
            .unwrap()
            .read_to_end(&mut out)
            .unwrap();
        assert_eq!(out, b">s\nAC\n".to_vec());
    }

    #[test]
    fn missing_file_names_the_path() {
        let Err(err) = open_input(&Input::Path(PathBuf::from("/nonexistent/x.fa"))) else {
            panic!("opening a missing file should fail");
        };
        assert!(err.to_string().contains("/nonexistent/x.fa"));
    }
}
