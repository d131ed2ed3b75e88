//! Myers O(ND) forward pass.
//!
//! [`find_edit_script`] searches the edit graph of two sequences depth by
//! depth and records, for every depth `d`, a snapshot of the frontier `V`
//! as it stood *before* depth `d` was explored. The backtracker replays
//! those snapshots to recover the path.
//!
//! ## Trace layout
//!
//! Snapshots live in one flat arena instead of one allocation per depth.
//! Snapshot `d` stores diagonals `-(d+1) ..= d+1` (`2d + 3` cells), which is
//! every diagonal the tie-break at depth `d` can read. A search that ends
//! at depth `D` therefore holds `(D + 1)(D + 3)` cells, and cells are `i32`
//! to keep that quadratic term small. [`trace_bytes`] gives the exact bound
//! and [`max_depth_within`] inverts it for a byte budget.
//!
//! Inputs must stay below `i32::MAX` elements per side.

/// Marker for frontier cells no path has reached yet.
///
/// Never read by a well-formed search: the tie-break only consults diagonals
/// filled at the previous depth, plus the seed `V[1] = 0`.
pub(crate) const UNREACHED: isize = -1;

const CELL_BYTES: usize = std::mem::size_of::<i32>();
const START_BYTES: usize = std::mem::size_of::<usize>();

/// Upper bound on trace memory for a search that ends at depth `depth`.
///
/// Counts snapshot cells plus the per-depth start offsets. Saturates at
/// `usize::MAX`.
pub fn trace_bytes(depth: usize) -> usize {
    let cells = depth.saturating_add(3).saturating_mul(CELL_BYTES);
    depth
        .saturating_add(1)
        .saturating_mul(cells.saturating_add(START_BYTES))
}

/// Deepest search whose trace fits in `budget` bytes, or `None` when even
/// depth 0 does not fit.
pub fn max_depth_within(budget: usize) -> Option<usize> {
    if trace_bytes(0) > budget {
        return None;
    }
    // trace_bytes is monotonic and grows faster than depth, so the answer
    // lies below budget / CELL_BYTES.
    let (mut lo, mut hi) = (0usize, budget / CELL_BYTES);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if trace_bytes(mid) <= budget {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Some(lo)
}

/// Tie-break shared by the forward and backtrack passes.
///
/// Returns `true` when the step onto diagonal `k` at depth `d` comes from
/// diagonal `k + 1` (a move down, i.e. an insertion), `false` when it comes
/// from diagonal `k - 1` (a move right, i.e. a deletion).
#[inline]
pub(crate) fn moves_down(k: isize, d: isize, frontier: impl Fn(isize) -> isize) -> bool {
    k == -d || (k != d && frontier(k - 1) < frontier(k + 1))
}

/// Frontier snapshots produced by the forward pass, plus the edit distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    cells: Vec<i32>,
    starts: Vec<usize>,
    edit_distance: usize,
}

impl Trace {
    fn with_capacity(depth_hint: usize) -> Self {
        Self {
            cells: Vec::new(),
            starts: Vec::with_capacity(depth_hint),
            edit_distance: 0,
        }
    }

    fn push_snapshot(&mut self, v: &[isize], offset: isize, d: isize) {
        let lo = (offset - d - 1) as usize;
        let hi = (offset + d + 1) as usize;
        self.starts.push(self.cells.len());
        self.cells.extend(v[lo..=hi].iter().map(|&x| x as i32));
    }

    /// Bytes held by the snapshot arena and its offsets.
    pub fn heap_bytes(&self) -> usize {
        self.cells.len() * CELL_BYTES + self.starts.len() * START_BYTES
    }

    /// Number of recorded snapshots (`D + 1`).
    pub fn depth_count(&self) -> usize {
        self.starts.len()
    }

    /// Length of the shortest edit script.
    pub fn edit_distance(&self) -> usize {
        self.edit_distance
    }

    /// Snapshot of `V` taken before depth `d` was explored.
    ///
    /// Returns `None` when `d` is past the terminal depth.
    pub fn frontier(&self, d: usize) -> Option<Frontier<'_>> {
        let start = *self.starts.get(d)?;
        let end = start + 2 * d + 3;
        self.cells.get(start..end).map(|cells| Frontier { depth: d, cells })
    }
}

/// Read-only view of one trace snapshot, indexed by diagonal.
#[derive(Debug, Clone, Copy)]
pub struct Frontier<'t> {
    depth: usize,
    cells: &'t [i32],
}

impl Frontier<'_> {
    /// Furthest `x` recorded on diagonal `k`, or [`UNREACHED`] when `k` lies
    /// outside the snapshot or was never visited.
    pub fn get(&self, k: isize) -> isize {
        let idx = k + self.depth as isize + 1;
        if idx < 0 {
            return UNREACHED;
        }
        self.cells
            .get(idx as usize)
            .map_or(UNREACHED, |&x| x as isize)
    }

    /// Depth this snapshot belongs to.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Run the forward pass over `a` (old) and `b` (new).
///
/// Total over all inputs: the search always reaches `(n, m)` no later than
/// depth `n + m`. Memory grows with the square of the edit distance; use
/// [`find_edit_script_within`] when inputs are untrusted.
pub fn find_edit_script<T: PartialEq>(a: &[T], b: &[T]) -> Trace {
    let max = a.len() + b.len();
    search(a, b, max).unwrap_or_else(|| Trace {
        // Depth n + m always reaches the end point.
        edit_distance: max,
        ..Trace::with_capacity(0)
    })
}

/// Run the forward pass, giving up once the search would pass `max_depth`.
///
/// Returns `None` when the edit distance exceeds `max_depth`. Pairs whose
/// length difference alone exceeds `max_depth` are rejected before any
/// allocation.
pub fn find_edit_script_within<T: PartialEq>(
    a: &[T],
    b: &[T],
    max_depth: usize,
) -> Option<Trace> {
    if a.len().abs_diff(b.len()) > max_depth {
        return None;
    }
    search(a, b, max_depth)
}

fn search<T: PartialEq>(a: &[T], b: &[T], max_depth: usize) -> Option<Trace> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;
    let offset = max + 1;
    let last = max.min(isize::try_from(max_depth).unwrap_or(isize::MAX));

    let mut v = vec![UNREACHED; (2 * max + 3) as usize];
    v[(1 + offset) as usize] = 0;

    let mut trace = Trace::with_capacity((last as usize).min(1024) + 1);

    for d in 0..=last {
        trace.push_snapshot(&v, offset, d);

        let mut k = -d;
        while k <= d {
            let mut x = if moves_down(k, d, |i| v[(i + offset) as usize]) {
                v[(k + 1 + offset) as usize]
            } else {
                v[(k - 1 + offset) as usize] + 1
            };
            let mut y = x - k;

            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }

            v[(k + offset) as usize] = x;

            if x >= n && y >= m {
                trace.edit_distance = d as usize;
                return Some(trace);
            }
            k += 2;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_both_empty_has_zero_distance() {
        let trace = find_edit_script::<char>(&[], &[]);
        assert_eq!(trace.edit_distance(), 0);
        assert_eq!(trace.depth_count(), 1);
    }

    #[test]
    fn test_one_side_empty_distance_is_length() {
        let trace = find_edit_script(&[] as &[char], &chars("xy"));
        assert_eq!(trace.edit_distance(), 2);

        let trace = find_edit_script(&chars("xyz"), &[]);
        assert_eq!(trace.edit_distance(), 3);
    }

    #[test]
    fn test_identical_sequences_are_one_snake() {
        let a = chars("identical");
        let trace = find_edit_script(&a, &a);
        assert_eq!(trace.edit_distance(), 0);
        assert_eq!(trace.depth_count(), 1);
    }

    #[test]
    fn test_classic_abcabba_cbabac() {
        // Canonical example from Myers' paper: D = 5.
        let trace = find_edit_script(&chars("ABCABBA"), &chars("CBABAC"));
        assert_eq!(trace.edit_distance(), 5);
        assert_eq!(trace.depth_count(), 6);
    }

    #[test]
    fn test_snapshot_shapes() {
        let trace = find_edit_script(&chars("Hello"), &chars("Hallo"));
        assert_eq!(trace.edit_distance(), 2);

        let first = trace.frontier(0).unwrap();
        assert_eq!(first.get(1), 0);

        // Before depth 2: V[-1] = 1, V[1] = 2.
        let before_two = trace.frontier(2).unwrap();
        assert_eq!(before_two.get(-1), 1);
        assert_eq!(before_two.get(1), 2);
        assert_eq!(before_two.get(0), 1);

        assert!(trace.frontier(3).is_none());
    }

    #[test]
    fn test_frontier_out_of_range_is_unreached() {
        let trace = find_edit_script(&chars("ab"), &chars("ba"));
        let f = trace.frontier(0).unwrap();
        assert_eq!(f.get(-50), UNREACHED);
        assert_eq!(f.get(50), UNREACHED);
    }

    #[test]
    fn test_trace_bytes_matches_disjoint_worst_case() {
        // Disjoint inputs force D = n + m, the quadratic worst case.
        let a = vec![0u8; 60];
        let b = vec![1u8; 60];
        let trace = find_edit_script(&a, &b);
        let d = trace.edit_distance();
        assert_eq!(d, 120);
        assert_eq!(trace.cells.len(), (d + 1) * (d + 3));
        assert_eq!(trace.heap_bytes(), trace_bytes(d));
    }

    #[test]
    fn test_max_depth_within_is_tight() {
        assert_eq!(max_depth_within(trace_bytes(0) - 1), None);
        assert_eq!(max_depth_within(trace_bytes(0)), Some(0));
        for depth in [1, 7, 500, 8189] {
            assert_eq!(max_depth_within(trace_bytes(depth)), Some(depth));
            assert_eq!(max_depth_within(trace_bytes(depth + 1) - 1), Some(depth));
        }
        assert_eq!(trace_bytes(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_within_stops_at_depth_limit() {
        let a = chars("ab");
        let b = chars("cd");
        assert!(find_edit_script_within(&a, &b, 3).is_none());

        let trace = find_edit_script_within(&a, &b, 4).unwrap();
        assert_eq!(trace.edit_distance(), 4);
        assert_eq!(trace, find_edit_script(&a, &b));
    }

    #[test]
    fn test_within_rejects_length_gap_up_front() {
        let long = vec![7u8; 10_000];
        assert!(find_edit_script_within(&long, &[], 9_999).is_none());
        assert!(find_edit_script_within(&long, &long, 0).is_some());
    }

    #[test]
    fn test_moves_down_tie_break() {
        let v = |k: isize| match k {
            -1 => 3,
            1 => 3,
            _ => 0,
        };
        // k == -d always moves down
        assert!(moves_down(-2, 2, v));
        // k == d always moves right
        assert!(!moves_down(2, 2, v));
        // equal neighbours move right
        assert!(!moves_down(0, 2, v));
        // strictly further on k+1 moves down
        assert!(moves_down(0, 2, |k| if k == 1 { 4 } else { 3 }));
    }
}
