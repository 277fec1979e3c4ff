/// Filtering and ordering of reconstructed local alignments
use super::pairwise::LocalAlignment;

/// Deduplicate candidates, keep those sharing the maximum length, and order
/// them by start position.
///
/// Deduplication runs over the canonical field ordering of
/// [`LocalAlignment`], so the result is deterministic regardless of the
/// order candidates were produced in. An empty candidate set yields an
/// empty result.
pub fn select_maximal(mut candidates: Vec<LocalAlignment>) -> Vec<LocalAlignment> {
    candidates.sort();
    candidates.dedup();

    let max_len = match candidates.iter().map(|a| a.length).max() {
        Some(len) => len,
        None => return Vec::new(),
    };

    let mut selected: Vec<LocalAlignment> = candidates
        .into_iter()
        .filter(|a| a.length == max_len)
        .collect();
    selected.sort_by_key(|a| (a.seq1_start, a.seq2_start));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(seq: &[u8], start1: usize, start2: usize) -> LocalAlignment {
        LocalAlignment {
            seq1_aligned: seq.to_vec(),
            seq2_aligned: seq.to_vec(),
            length: seq.len(),
            seq1_start: start1,
            seq2_start: start2,
        }
    }

    #[test]
    fn test_empty_candidates() {
        assert!(select_maximal(Vec::new()).is_empty());
    }

    #[test]
    fn test_keeps_only_maximum_length() {
        let selected = select_maximal(vec![
            candidate(b"ACG", 4, 0),
            candidate(b"AC", 9, 2),
            candidate(b"TGA", 0, 1),
        ]);

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|a| a.length == 3));
    }

    #[test]
    fn test_orders_by_start_positions() {
        let selected = select_maximal(vec![
            candidate(b"ACG", 7, 0),
            candidate(b"TGA", 2, 5),
            candidate(b"GGG", 2, 1),
        ]);

        let starts: Vec<_> = selected.iter().map(|a| (a.seq1_start, a.seq2_start)).collect();
        assert_eq!(starts, vec![(2, 1), (2, 5), (7, 0)]);
    }

    #[test]
    fn test_duplicates_merge() {
        let selected = select_maximal(vec![
            candidate(b"ACG", 4, 0),
            candidate(b"ACG", 4, 0),
            candidate(b"ACG", 4, 0),
        ]);

        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let input = vec![
            candidate(b"ACG", 4, 0),
            candidate(b"TGA", 0, 1),
            candidate(b"TGA", 0, 1),
            candidate(b"AC", 9, 2),
        ];

        let once = select_maximal(input.clone());
        let twice = select_maximal(once.clone());
        assert_eq!(once, twice);
    }
}
