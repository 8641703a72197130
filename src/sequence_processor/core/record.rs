/// One sequence record: the header line without its `>` marker and the
/// sequence with all line breaks and whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub header: Vec<u8>,
    pub sequence: Vec<u8>,
}

impl Record {
    pub fn new(header: Vec<u8>, sequence: Vec<u8>) -> Self {
        Self { header, sequence }
    }
}
