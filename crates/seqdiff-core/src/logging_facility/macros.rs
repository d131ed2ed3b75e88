//! Operation lifecycle macros
//!
//! A boundary operation emits one `start` event, then exactly one `end` or
//! `end_error` event. Both closing events take the `Instant` captured before
//! `start` and derive `duration_ms` from it, so callers never compute
//! durations by hand.
//!
//! Extra `key = value` fields are forwarded to `tracing` unchanged. The
//! macros go through `$crate::tracing`, so callers need no direct `tracing`
//! dependency.

/// Emit the `start` event of an operation.
///
/// ```
/// # use seqdiff_core::log_op_start;
/// log_op_start!("compare_texts");
/// log_op_start!("compare_texts", mode = "lines", origin = "cli");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Emit the `end` event of an operation begun at `since`.
///
/// ```
/// # use seqdiff_core::log_op_end;
/// let started = std::time::Instant::now();
/// log_op_end!("compare_texts", since = started, edit_distance = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, since = $since:expr $(, $($field:tt)*)?) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $crate::logging_facility::elapsed_ms($since),
            $($($field)*)?
        );
    };
}

/// Emit the `end_error` event of an operation begun at `since`.
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError).
/// Its stable code, kind, input side (when known) and message are recorded
/// as `err_code`, `err_kind`, `err_side` and `err_message`.
///
/// ```
/// # use seqdiff_core::{log_op_error, errors::SeqDiffError};
/// let started = std::time::Instant::now();
/// let err = SeqDiffError::InvalidMode { mode: "pixels".to_string() };
/// log_op_error!("compare_texts", err, since = started);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, since = $since:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = ::std::convert::Into::into($err);
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $crate::logging_facility::elapsed_ms($since),
            err_code = ex_err.code(),
            err_kind = ?ex_err.kind(),
            err_side = ex_err.side(),
            err_message = ex_err.message(),
            $($($field)*)?
        );
    }};
}
