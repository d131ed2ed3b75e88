//! Comparison entry points.
//!
//! [`diff_sequences`] runs the four stages (forward pass, backtrack, run
//! merge, stats) over pre-tokenized input and cannot fail.
//! [`compare_texts`] is the boundary: it normalizes and tokenizes raw text,
//! enforces [`EngineConfig::max_elements`] and [`EngineConfig::max_trace_bytes`],
//! and logs the operation.

use crate::config::{CompareOptions, EngineConfig};
use crate::diff::backtrack::backtrack;
use crate::diff::model::{DiffMode, DiffResult, ElementaryOp};
use crate::diff::myers::{find_edit_script, find_edit_script_within, Trace};
use crate::diff::runs::merge_runs;
use crate::diff::stats::compute_stats;
use crate::errors::{Result, SeqDiffError};
use crate::text::{normalize, tokenize};
use crate::{log_op_end, log_op_error, log_op_start};
use seqdiff_core_types::RequestContext;
use std::time::Instant;

/// Shortest edit script between `a` and `b` as left-to-right elementary ops.
pub fn edit_script<'a, T: PartialEq>(a: &'a [T], b: &'a [T]) -> Vec<ElementaryOp<'a, T>> {
    let trace = find_edit_script(a, b);
    backtrack(a, b, &trace)
}

/// Diff two pre-tokenized sequences.
///
/// Run values are joined with the separator of `mode`. Unbounded: trace
/// memory grows with the square of the edit distance.
pub fn diff_sequences<T>(a: &[T], b: &[T], mode: DiffMode) -> DiffResult
where
    T: PartialEq + AsRef<str>,
{
    let trace = find_edit_script(a, b);
    assemble(a, b, &trace, mode)
}

fn assemble<T>(a: &[T], b: &[T], trace: &Trace, mode: DiffMode) -> DiffResult
where
    T: PartialEq + AsRef<str>,
{
    let ops = backtrack(a, b, trace);
    let runs = merge_runs(&ops, mode);
    let stats = compute_stats(&runs);

    DiffResult {
        mode,
        runs,
        stats,
        edit_distance: trace.edit_distance(),
    }
}

/// Compare two raw texts under `options`, with a fresh request context.
///
/// # Errors
///
/// - `InputTooLarge` — either side tokenizes to more than
///   `config.max_elements` elements
/// - `EditBudgetExceeded` — the edit distance needs a trace larger than
///   `config.max_trace_bytes`
/// - `InvalidConfig` — `config.max_trace_bytes` is below the minimum trace
pub fn compare_texts(
    a: &str,
    b: &str,
    options: &CompareOptions,
    config: &EngineConfig,
) -> Result<DiffResult> {
    compare_texts_with_context(a, b, options, config, &RequestContext::new())
}

/// Compare two raw texts under `options`, correlating log events with `ctx`.
///
/// # Errors
///
/// See [`compare_texts`].
pub fn compare_texts_with_context(
    a: &str,
    b: &str,
    options: &CompareOptions,
    config: &EngineConfig,
    ctx: &RequestContext,
) -> Result<DiffResult> {
    const OP: &str = "compare_texts";
    let started = Instant::now();
    let request_id = ctx.request_id.as_str();

    log_op_start!(
        OP,
        request_id = request_id,
        origin = ctx.origin.as_deref().unwrap_or("unspecified"),
        mode = options.mode.as_str(),
        ignore_case = options.ignore_case,
        ignore_whitespace = options.ignore_whitespace
    );

    let a_norm = normalize(a, options);
    let b_norm = normalize(b, options);
    let a_tokens = tokenize(&a_norm, options.mode);
    let b_tokens = tokenize(&b_norm, options.mode);

    let outcome = check_limit("a", a_tokens.len(), config)
        .and_then(|()| check_limit("b", b_tokens.len(), config))
        .and_then(|()| config.max_edit_depth())
        .and_then(|max_depth| {
            find_edit_script_within(&a_tokens, &b_tokens, max_depth).ok_or(
                SeqDiffError::EditBudgetExceeded {
                    max_depth,
                    budget_bytes: config.max_trace_bytes,
                },
            )
        });

    let trace = match outcome {
        Ok(trace) => trace,
        Err(err) => {
            log_op_error!(
                OP,
                err.clone(),
                since = started,
                request_id = request_id,
                len_a = a_tokens.len(),
                len_b = b_tokens.len()
            );
            return Err(err);
        }
    };

    let result = assemble(&a_tokens, &b_tokens, &trace, options.mode);

    log_op_end!(
        OP,
        since = started,
        request_id = request_id,
        len_a = a_tokens.len(),
        len_b = b_tokens.len(),
        edit_distance = result.edit_distance,
        trace_bytes = trace.heap_bytes(),
        run_count = result.runs.len(),
        similarity = result.stats.similarity
    );

    Ok(result)
}

fn check_limit(side: &str, len: usize, config: &EngineConfig) -> Result<()> {
    if len > config.max_elements {
        return Err(SeqDiffError::InputTooLarge {
            side: side.to_string(),
            len,
            limit: config.max_elements,
        });
    }
    Ok(())
}
