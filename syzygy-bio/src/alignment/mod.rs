pub mod matrix;
pub mod pairwise;
pub mod scoring;
pub mod selection;

pub use matrix::{DpMatrix, Traceback};
pub use pairwise::{GlobalAlignment, LocalAlignment, MaximaTracker, PairwiseAligner};
pub use scoring::{IdentityMatrix, ScoringMatrix, SubstitutionMatrix};
pub use selection::select_maximal;

use syzygy_core::SyzygyError;

/// Gap character used in rendered alignments
pub const GAP: u8 = b'-';

/// Alignment mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentMode {
    /// End-to-end alignment of both full sequences (Needleman-Wunsch)
    Global,
    /// Best-scoring subsequence matches (Smith-Waterman)
    Local,
}

impl std::str::FromStr for AlignmentMode {
    type Err = SyzygyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(AlignmentMode::Global),
            "local" => Ok(AlignmentMode::Local),
            other => Err(SyzygyError::InvalidInput(format!(
                "unknown alignment mode '{}', expected 'global' or 'local'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignmentMode::Global => write!(f, "global"),
            AlignmentMode::Local => write!(f, "local"),
        }
    }
}

/// Result of one [`align`] call
#[derive(Debug, Clone)]
pub enum AlignmentOutcome {
    Global(GlobalAlignment),
    Local(Vec<LocalAlignment>),
}

impl AlignmentOutcome {
    /// Aligned sequence pairs in output order, gaps rendered as `-`
    pub fn into_pairs(self) -> Vec<(Vec<u8>, Vec<u8>)> {
        match self {
            AlignmentOutcome::Global(alignment) => {
                vec![(alignment.seq1_aligned, alignment.seq2_aligned)]
            }
            AlignmentOutcome::Local(alignments) => alignments
                .into_iter()
                .map(|a| (a.seq1_aligned, a.seq2_aligned))
                .collect(),
        }
    }
}

/// Align two sequences under the given scoring scheme and linear gap penalty
pub fn align<S: ScoringMatrix>(
    seq1: &[u8],
    seq2: &[u8],
    scoring: S,
    mode: AlignmentMode,
    gap: i32,
) -> AlignmentOutcome {
    let aligner = PairwiseAligner::new(scoring, gap);
    match mode {
        AlignmentMode::Global => AlignmentOutcome::Global(aligner.global(seq1, seq2)),
        AlignmentMode::Local => AlignmentOutcome::Local(aligner.local(seq1, seq2)),
    }
}
