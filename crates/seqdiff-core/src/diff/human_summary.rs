//! Human-readable rendering of a [`DiffResult`].

use crate::diff::model::{DiffResult, RunKind};

/// Render a plain-text report: a stats header followed by one prefixed
/// line per element line of every run.
///
/// The count line ends in `(identical)` when nothing changed.
///
/// Prefixes are `"  "` for kept, `"- "` for removed and `"+ "` for added
/// text. Run values containing newlines (line mode) are split so every
/// output line carries its prefix.
pub fn render_summary(result: &DiffResult) -> String {
    let stats = &result.stats;
    let mut out = String::new();

    out.push_str(&format!(
        "mode: {}  similarity: {:.2}%\n",
        result.mode, stats.similarity
    ));
    let verdict = if result.is_identical() {
        "identical".to_string()
    } else {
        format!("{} changes", stats.total_changes)
    };
    out.push_str(&format!(
        "+{} -{} ={} ({})\n",
        stats.additions, stats.deletions, stats.unchanged, verdict
    ));

    if result.runs.is_empty() {
        out.push_str("(no elements)\n");
        return out;
    }

    out.push('\n');
    for run in &result.runs {
        let prefix = match run.kind {
            RunKind::Kept => "  ",
            RunKind::Removed => "- ",
            RunKind::Added => "+ ",
        };
        for line in run.value.split('\n') {
            out.push_str(prefix);
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::diff_sequences;
    use crate::diff::model::DiffMode;

    #[test]
    fn test_render_lines() {
        let a = ["keep", "old"];
        let b = ["keep", "new", "more"];
        let summary = render_summary(&diff_sequences(&a, &b, DiffMode::Lines));

        assert!(summary.starts_with("mode: lines  similarity: 25.00%\n"));
        assert!(summary.contains("+2 -1 =1 (3 changes)\n"));
        assert!(summary.ends_with("  keep\n- old\n+ new\n+ more\n"));
    }

    #[test]
    fn test_render_empty() {
        let empty: [&str; 0] = [];
        let summary = render_summary(&diff_sequences(&empty, &empty, DiffMode::Chars));
        assert!(summary.contains("similarity: 100.00%"));
        assert!(summary.contains("+0 -0 =0 (identical)\n"));
        assert!(summary.ends_with("(no elements)\n"));
    }

    #[test]
    fn test_render_identical() {
        let a = ["same", "lines"];
        let summary = render_summary(&diff_sequences(&a, &a, DiffMode::Lines));
        assert!(summary.contains("+0 -0 =2 (identical)\n"));
        assert!(summary.ends_with("  same\n  lines\n"));
    }
}
