//! Restricted arg-min / arg-max over a quality-score sequence.
//!
//! The shared primitive under variant selection: find the index of the
//! best (or worst) quality score, optionally restricted to a candidate
//! subset of indices.

use thiserror::Error;

/// Search direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Min,
    Max,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtremumError {
    #[error("cannot search an empty score sequence")]
    EmptyInput,
}

/// Index of the extreme score in `scores`.
///
/// With `candidates == None` the full index range is searched. With a
/// non-empty candidate set, only those indices are considered
/// (out-of-range candidates are skipped). Ties resolve to the
/// first-encountered (lowest) index.
///
/// An empty candidate set yields `Ok(None)`: there is no feasible
/// choice, and the caller keeps its baseline. The search is never
/// silently widened to the full range, since that could pick an index
/// the candidate filter was meant to exclude.
pub fn arg_extremum(
    scores: &[i64],
    candidates: Option<&[usize]>,
    direction: Direction,
) -> Result<Option<usize>, ExtremumError> {
    if scores.is_empty() {
        return Err(ExtremumError::EmptyInput);
    }

    let better = |a: i64, b: i64| match direction {
        Direction::Min => a < b,
        Direction::Max => a > b,
    };

    let best = match candidates {
        None => {
            let mut best = 0;
            for (i, &score) in scores.iter().enumerate().skip(1) {
                if better(score, scores[best]) {
                    best = i;
                }
            }
            Some(best)
        }
        Some(indices) => {
            let mut best: Option<usize> = None;
            for &i in indices {
                if i >= scores.len() {
                    continue;
                }
                match best {
                    Some(b) if !better(scores[i], scores[b]) => {}
                    _ => best = Some(i),
                }
            }
            best
        }
    };

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_min_and_max() {
        let scores = [3, 1, 4, 1, 5];
        assert_eq!(arg_extremum(&scores, None, Direction::Min), Ok(Some(1)));
        assert_eq!(arg_extremum(&scores, None, Direction::Max), Ok(Some(4)));
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let scores = [2, 7, 7, 2];
        assert_eq!(arg_extremum(&scores, None, Direction::Max), Ok(Some(1)));
        assert_eq!(arg_extremum(&scores, None, Direction::Min), Ok(Some(0)));
    }

    #[test]
    fn restriction_ignores_other_indices() {
        let scores = [10, 1, 5, 8];
        // Index 0 holds the global max but is not a candidate.
        assert_eq!(
            arg_extremum(&scores, Some(&[1, 2, 3]), Direction::Max),
            Ok(Some(3))
        );
        assert_eq!(
            arg_extremum(&scores, Some(&[2, 3]), Direction::Min),
            Ok(Some(2))
        );
    }

    #[test]
    fn restricted_ties_resolve_to_first_candidate() {
        let scores = [5, 9, 9, 9];
        assert_eq!(
            arg_extremum(&scores, Some(&[1, 2, 3]), Direction::Max),
            Ok(Some(1))
        );
    }

    #[test]
    fn empty_candidate_set_means_no_feasible_choice() {
        let scores = [1, 2, 3];
        assert_eq!(arg_extremum(&scores, Some(&[]), Direction::Max), Ok(None));
        assert_eq!(arg_extremum(&scores, Some(&[]), Direction::Min), Ok(None));
    }

    #[test]
    fn out_of_range_candidates_are_skipped() {
        let scores = [1, 2];
        assert_eq!(
            arg_extremum(&scores, Some(&[7, 1]), Direction::Max),
            Ok(Some(1))
        );
        // All candidates out of range behaves like an empty set.
        assert_eq!(arg_extremum(&scores, Some(&[7, 8]), Direction::Max), Ok(None));
    }

    #[test]
    fn empty_scores_is_an_error() {
        assert_eq!(
            arg_extremum(&[], None, Direction::Min),
            Err(ExtremumError::EmptyInput)
        );
        assert_eq!(
            arg_extremum(&[], Some(&[0]), Direction::Max),
            Err(ExtremumError::EmptyInput)
        );
    }

    #[test]
    fn single_element_sequence() {
        assert_eq!(arg_extremum(&[42], None, Direction::Min), Ok(Some(0)));
        assert_eq!(arg_extremum(&[42], None, Direction::Max), Ok(Some(0)));
    }
}
