//! Core types shared across facetcut facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! facility and by anything that asserts on its output:
//!
//! - **Field keys**: op, event
//! - **Event names**: start, end, end_error

pub mod schema;
