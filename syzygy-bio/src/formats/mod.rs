pub mod fasta;

// Re-export fasta functions
pub use fasta::{parse_fasta, parse_fasta_bytes, write_fasta};
