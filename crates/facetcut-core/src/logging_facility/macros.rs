//! Canonical logging macros
//!
//! Every public facetcut operation brackets its work with these so that a
//! log consumer sees exactly one `start` and one `end` or `end_error` per call.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use facetcut_core::log_op_start;
/// log_op_start!("ensure_diamond_facets");
/// log_op_start!("ensure_diamond_facets", current_len = 2, model_len = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = facetcut_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = facetcut_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use facetcut_core::log_op_end;
/// log_op_end!("ensure_diamond_facets", duration_ms = 0, cut_len = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = facetcut_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = facetcut_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError).
/// Validation failures also report how many errors were collected.
///
/// # Example
///
/// ```
/// # use facetcut_core::{log_op_error, errors::FacetCutError};
/// let err = FacetCutError::EmptyCut { index: 0 };
/// log_op_error!("apply_cuts", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = facetcut_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            error_count = ex_err.validation_errors().len() as u64,
            $($field)*
        );
    }};
}
