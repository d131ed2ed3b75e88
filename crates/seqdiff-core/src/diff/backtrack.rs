//! Path reconstruction from a forward-pass [`Trace`].

use crate::diff::model::ElementaryOp;
use crate::diff::myers::{moves_down, Trace};

/// Walk `trace` from `(n, m)` back to the origin and return the elementary
/// ops in left-to-right order.
///
/// `a` and `b` must be the same sequences the trace was computed from.
pub fn backtrack<'a, T: PartialEq>(
    a: &'a [T],
    b: &'a [T],
    trace: &Trace,
) -> Vec<ElementaryOp<'a, T>> {
    let mut x = a.len() as isize;
    let mut y = b.len() as isize;
    let mut ops = Vec::with_capacity(a.len().max(b.len()) + trace.edit_distance());

    for depth in (0..trace.depth_count()).rev() {
        let Some(v) = trace.frontier(depth) else {
            continue;
        };
        let d = depth as isize;
        let k = x - y;

        let prev_k = if moves_down(k, d, |i| v.get(i)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v.get(prev_k);
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            ops.push(ElementaryOp::Keep(&a[(x - 1) as usize]));
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            if x > prev_x {
                ops.push(ElementaryOp::Delete(&a[(x - 1) as usize]));
                x -= 1;
            } else {
                ops.push(ElementaryOp::Insert(&b[(y - 1) as usize]));
                y -= 1;
            }
        }
    }

    ops.reverse();
    ops
}
