//! Pairwise sequence alignment and FASTA utilities for Syzygy

pub mod alignment;
pub mod formats;
pub mod sequence;

// Re-export commonly used types
pub use alignment::{
    align, AlignmentMode, AlignmentOutcome, GlobalAlignment, LocalAlignment, PairwiseAligner,
    ScoringMatrix, SubstitutionMatrix,
};
pub use formats::{parse_fasta, write_fasta};
pub use sequence::Sequence;
