//! Run-length merging of elementary ops.

use crate::diff::model::{DiffMode, DiffRun, ElementaryOp, RunKind};

/// Collapse adjacent ops of the same kind into [`DiffRun`]s.
///
/// Values inside a run are joined with the separator of `mode`. The result
/// never contains two adjacent runs of the same kind.
pub fn merge_runs<T: AsRef<str>>(ops: &[ElementaryOp<'_, T>], mode: DiffMode) -> Vec<DiffRun> {
    let separator = mode.separator();
    let mut runs: Vec<DiffRun> = Vec::new();
    let mut current: Option<DiffRun> = None;

    for op in ops {
        let kind = op.kind();
        let value = op.element().as_ref();

        match current.as_mut() {
            Some(run) if run.kind == kind => {
                run.value.push_str(separator);
                run.value.push_str(value);
                run.count += 1;
            }
            _ => {
                if let Some(done) = current.take() {
                    runs.push(done);
                }
                current = Some(DiffRun::new(kind, value, 1));
            }
        }
    }

    if let Some(done) = current {
        runs.push(done);
    }
    runs
}

/// Count of elements per kind, in `(kept, removed, added)` order.
pub fn count_by_kind(runs: &[DiffRun]) -> (usize, usize, usize) {
    runs.iter().fold((0, 0, 0), |(kept, removed, added), run| match run.kind {
        RunKind::Kept => (kept + run.count, removed, added),
        RunKind::Removed => (kept, removed + run.count, added),
        RunKind::Added => (kept, removed, added + run.count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ops_yield_no_runs() {
        let ops: Vec<ElementaryOp<'_, &str>> = Vec::new();
        assert!(merge_runs(&ops, DiffMode::Lines).is_empty());
    }

    #[test]
    fn test_chars_join_without_separator() {
        let (l1, l2, o) = ("l", "l", "o");
        let ops = [
            ElementaryOp::Keep(&l1),
            ElementaryOp::Keep(&l2),
            ElementaryOp::Keep(&o),
        ];
        assert_eq!(
            merge_runs(&ops, DiffMode::Chars),
            vec![DiffRun::new(RunKind::Kept, "llo", 3)]
        );
    }

    #[test]
    fn test_words_and_lines_use_their_separator() {
        let (a, b) = ("alpha", "beta");
        let ops = [ElementaryOp::Insert(&a), ElementaryOp::Insert(&b)];

        assert_eq!(merge_runs(&ops, DiffMode::Words)[0].value, "alpha beta");
        assert_eq!(merge_runs(&ops, DiffMode::Lines)[0].value, "alpha\nbeta");
    }

    #[test]
    fn test_kind_change_closes_run() {
        let (x, y, z) = ("x".to_string(), "y".to_string(), "z".to_string());
        let ops = [
            ElementaryOp::Delete(&x),
            ElementaryOp::Insert(&y),
            ElementaryOp::Delete(&z),
        ];
        let runs = merge_runs(&ops, DiffMode::Words);
        assert_eq!(runs.len(), 3);
        assert!(runs.windows(2).all(|w| w[0].kind != w[1].kind));
        assert_eq!(count_by_kind(&runs), (0, 2, 1));
    }
}
