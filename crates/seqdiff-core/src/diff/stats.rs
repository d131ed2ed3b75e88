//! Aggregate statistics over a run list.

use crate::diff::model::{DiffRun, DiffStats};
use crate::diff::runs::count_by_kind;

/// Sum run counts per kind and derive the similarity percentage.
///
/// `similarity = unchanged / (additions + deletions + unchanged) * 100`,
/// rounded to two decimals; `100.0` when there is nothing to compare.
pub fn compute_stats(runs: &[DiffRun]) -> DiffStats {
    let (unchanged, deletions, additions) = count_by_kind(runs);
    let total = additions + deletions + unchanged;

    let similarity = if total == 0 {
        100.0
    } else {
        round2(unchanged as f64 / total as f64 * 100.0)
    };

    DiffStats {
        additions,
        deletions,
        unchanged,
        total_changes: additions + deletions,
        similarity,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::RunKind;

    #[test]
    fn test_empty_runs_are_fully_similar() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.additions, 0);
        assert_eq!(stats.deletions, 0);
        assert_eq!(stats.unchanged, 0);
        assert_eq!(stats.total_changes, 0);
        assert_eq!(stats.similarity, 100.0);
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let runs = vec![
            DiffRun::new(RunKind::Kept, "H", 1),
            DiffRun::new(RunKind::Removed, "e", 1),
            DiffRun::new(RunKind::Added, "a", 1),
            DiffRun::new(RunKind::Kept, "llo", 3),
        ];
        let stats = compute_stats(&runs);
        assert_eq!(stats.unchanged, 4);
        assert_eq!(stats.total_changes, 2);
        assert_eq!(stats.similarity, 66.67);
    }

    #[test]
    fn test_nothing_shared_is_zero() {
        let runs = vec![DiffRun::new(RunKind::Added, "x y", 2)];
        assert_eq!(compute_stats(&runs).similarity, 0.0);
    }
}
