//! Canonical schema constants for structured logging and events
//!
//! `tracing` field names are identifiers at the call site, so the logging
//! macros and the comparison boundary spell these names out directly. The
//! constants are the contract that log consumers and the capture layer
//! read them back by.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_ORIGIN: &str = "origin";

// Comparison shape
pub const FIELD_MODE: &str = "mode";
pub const FIELD_LEN_A: &str = "len_a";
pub const FIELD_LEN_B: &str = "len_b";
pub const FIELD_EDIT_DISTANCE: &str = "edit_distance";
pub const FIELD_TRACE_BYTES: &str = "trace_bytes";
pub const FIELD_RUN_COUNT: &str = "run_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_SIDE: &str = "err_side";
pub const FIELD_ERR_MESSAGE: &str = "err_message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
