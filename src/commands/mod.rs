pub mod fasta2tab;
pub mod tab2fasta;
