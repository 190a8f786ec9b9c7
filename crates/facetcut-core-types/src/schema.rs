//! Canonical schema constants for structured logging and events
//!
//! The `log_op_*!` macros emit these keys and event names; log consumers and
//! the test capture layer read them back.

// Canonical field keys for structured logging
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
