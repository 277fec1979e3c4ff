/// Needleman-Wunsch and Smith-Waterman pairwise alignment
use tracing::debug;

use super::matrix::{DpMatrix, Traceback};
use super::scoring::ScoringMatrix;
use super::selection::select_maximal;
use super::{AlignmentMode, GAP};

/// Default minimum row/column separation between recorded local maxima
pub const DEFAULT_MIN_SEPARATION: usize = 6;

/// End-to-end alignment of two full sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalAlignment {
    pub score: i32,
    pub seq1_aligned: Vec<u8>,
    pub seq2_aligned: Vec<u8>,
}

/// One reconstructed local alignment.
///
/// The aligned strings are the contiguous stretches each walk consumed from
/// the original sequences; gap positions are not padded, so the two strings
/// may differ in length. `length` is the length of `seq1_aligned`, and the
/// start fields are 0-based indices into the original sequences.
///
/// Field order doubles as the canonical ordering used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalAlignment {
    pub seq1_aligned: Vec<u8>,
    pub seq2_aligned: Vec<u8>,
    pub length: usize,
    pub seq1_start: usize,
    pub seq2_start: usize,
}

/// Running maximum score and candidate end cells for local alignment.
///
/// Owned by the fill step and returned alongside the grids; nothing mutates
/// it from outside.
#[derive(Debug, Clone)]
pub struct MaximaTracker {
    best: i32,
    positions: Vec<(usize, usize)>,
    min_separation: usize,
}

impl MaximaTracker {
    pub fn new(min_separation: usize) -> Self {
        Self {
            best: i32::MIN,
            positions: Vec::new(),
            min_separation,
        }
    }

    /// Record one filled cell. A strictly greater score restarts the
    /// position list; an equal positive score is appended only when the cell
    /// is spatially distinct from every recorded position.
    pub fn observe(&mut self, row: usize, col: usize, score: i32) {
        if score > self.best {
            self.best = score;
            self.positions.clear();
            self.positions.push((row, col));
        } else if score == self.best && score > 0 && self.is_distinct(row, col) {
            self.positions.push((row, col));
        }
    }

    /// A cell is rejected only when it lies within the separation window of
    /// some recorded position on both axes at once.
    fn is_distinct(&self, row: usize, col: usize) -> bool {
        self.positions.iter().all(|&(r, c)| {
            row.abs_diff(r) >= self.min_separation || col.abs_diff(c) >= self.min_separation
        })
    }

    pub fn best(&self) -> i32 {
        self.best
    }

    pub fn positions(&self) -> &[(usize, usize)] {
        &self.positions
    }
}

/// Pairwise aligner over a substitution-scoring scheme and linear gap penalty
pub struct PairwiseAligner<S: ScoringMatrix> {
    scoring: S,
    gap: i32,
    min_separation: usize,
}

impl<S: ScoringMatrix> PairwiseAligner<S> {
    pub fn new(scoring: S, gap: i32) -> Self {
        Self {
            scoring,
            gap,
            min_separation: DEFAULT_MIN_SEPARATION,
        }
    }

    pub fn with_min_separation(mut self, min_separation: usize) -> Self {
        self.min_separation = min_separation;
        self
    }

    /// Fill the DP grids for the given mode.
    ///
    /// Cells are visited row-major; each depends only on its three
    /// already-filled neighbors. The returned tracker carries the local-mode
    /// candidate maxima and stays empty for global fills.
    pub fn fill(
        &self,
        seq1: &[u8],
        seq2: &[u8],
        mode: AlignmentMode,
    ) -> (DpMatrix, MaximaTracker) {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;
        let mut matrix = DpMatrix::new(rows, cols, mode, self.gap);
        let mut maxima = MaximaTracker::new(self.min_separation);

        for i in 1..rows {
            for j in 1..cols {
                let subst = self.scoring.score(seq1[i - 1], seq2[j - 1]);
                let diagonal = matrix.score(i - 1, j - 1) + subst;
                let up = matrix.score(i - 1, j) + self.gap;
                let left = matrix.score(i, j - 1) + self.gap;

                let best = match mode {
                    AlignmentMode::Global => diagonal.max(up).max(left),
                    AlignmentMode::Local => 0.max(diagonal).max(up).max(left),
                };

                // Fixed tie-break policy: diagonal wins over up, up over left
                let trace = if mode == AlignmentMode::Local && best == 0 {
                    Traceback::Stop
                } else if best == diagonal {
                    Traceback::Diagonal
                } else if best == up {
                    Traceback::Up
                } else {
                    Traceback::Left
                };

                matrix.set(i, j, best, trace);

                if mode == AlignmentMode::Local {
                    maxima.observe(i, j, best);
                }
            }
        }

        (matrix, maxima)
    }

    /// End-to-end alignment of both sequences (Needleman-Wunsch)
    pub fn global(&self, seq1: &[u8], seq2: &[u8]) -> GlobalAlignment {
        let (matrix, _) = self.fill(seq1, seq2, AlignmentMode::Global);
        let (seq1_aligned, seq2_aligned) = traceback_global(&matrix, seq1, seq2);

        GlobalAlignment {
            score: matrix.score(seq1.len(), seq2.len()),
            seq1_aligned,
            seq2_aligned,
        }
    }

    /// All selected maximal local alignments (Smith-Waterman).
    ///
    /// Returns an empty vector when no cell scores above zero.
    pub fn local(&self, seq1: &[u8], seq2: &[u8]) -> Vec<LocalAlignment> {
        let (matrix, maxima) = self.fill(seq1, seq2, AlignmentMode::Local);
        debug!(
            "local fill complete: best={} candidates={}",
            maxima.best(),
            maxima.positions().len()
        );

        let candidates = maxima
            .positions()
            .iter()
            .filter_map(|&(end_i, end_j)| traceback_local(&matrix, seq1, seq2, end_i, end_j))
            .collect();

        select_maximal(candidates)
    }
}

/// Rebuild the end-to-end alignment by walking the traceback grid from the
/// bottom-right corner back to the origin.
fn traceback_global(matrix: &DpMatrix, seq1: &[u8], seq2: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut seq1_aligned = Vec::new();
    let mut seq2_aligned = Vec::new();
    let mut i = seq1.len();
    let mut j = seq2.len();

    while i > 0 || j > 0 {
        match matrix.trace(i, j) {
            Traceback::Diagonal => {
                seq1_aligned.push(seq1[i - 1]);
                seq2_aligned.push(seq2[j - 1]);
                i -= 1;
                j -= 1;
            }
            Traceback::Up => {
                seq1_aligned.push(seq1[i - 1]);
                seq2_aligned.push(GAP);
                i -= 1;
            }
            Traceback::Left => {
                seq1_aligned.push(GAP);
                seq2_aligned.push(seq2[j - 1]);
                j -= 1;
            }
            Traceback::Stop => break,
        }
    }

    seq1_aligned.reverse();
    seq2_aligned.reverse();
    (seq1_aligned, seq2_aligned)
}

/// Walk one local alignment backward from a candidate end cell.
///
/// The walk stops at row/column 0 or the first zero-score cell. Gap moves
/// consume a symbol from one sequence without padding the other, so the
/// outputs are the exact stretches the walk covered. Returns `None` when
/// either output would be empty.
fn traceback_local(
    matrix: &DpMatrix,
    seq1: &[u8],
    seq2: &[u8],
    end_i: usize,
    end_j: usize,
) -> Option<LocalAlignment> {
    let mut seq1_aligned = Vec::new();
    let mut seq2_aligned = Vec::new();
    let mut i = end_i;
    let mut j = end_j;

    while i > 0 && j > 0 && matrix.score(i, j) > 0 {
        match matrix.trace(i, j) {
            Traceback::Diagonal => {
                seq1_aligned.push(seq1[i - 1]);
                seq2_aligned.push(seq2[j - 1]);
                i -= 1;
                j -= 1;
            }
            Traceback::Up => {
                seq1_aligned.push(seq1[i - 1]);
                i -= 1;
            }
            Traceback::Left => {
                seq2_aligned.push(seq2[j - 1]);
                j -= 1;
            }
            Traceback::Stop => break,
        }
    }

    if seq1_aligned.is_empty() || seq2_aligned.is_empty() {
        return None;
    }

    seq1_aligned.reverse();
    seq2_aligned.reverse();
    let length = seq1_aligned.len();

    Some(LocalAlignment {
        seq1_aligned,
        seq2_aligned,
        length,
        seq1_start: i,
        seq2_start: j,
    })
}
