mod fasta;
mod tabular;

pub use fasta::FastaReader;
pub use tabular::TabularReader;
