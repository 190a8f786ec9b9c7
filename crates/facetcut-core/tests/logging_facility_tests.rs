#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::*;
use facetcut_core::logging_facility::test_capture::init_test_capture;
use facetcut_core::{diamond_equals, ensure_diamond_facets, log_op_end, log_op_error, log_op_start};
use facetcut_core::{FacetCutError, ValidationError, ValidationErrorKind};
use facetcut_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, current_len = 3u64);

    let event = capture
        .find(op_name, EVENT_START)
        .expect("start event should be captured");
    assert_eq!(event.field("current_len"), Some("3"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42u64);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_reports_code_and_count() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = FacetCutError::Validation {
        errors: vec![
            ValidationError::new(ValidationErrorKind::InvalidAddress, "currentFacets: 0.facetAddress", "x"),
            ValidationError::new(ValidationErrorKind::ZeroAddress, "modelFacets: 0.facetAddress", "y"),
        ],
    };
    log_op_error!(op_name, err, duration_ms = 10u64);

    let event = capture
        .find(op_name, EVENT_END_ERROR)
        .expect("end_error event should be captured");
    assert_eq!(event.field("err_code"), Some("ERR_VALIDATION"));
    assert_eq!(event.field("error_count"), Some("2"));
    assert_eq!(event.level, tracing::Level::ERROR);
}

#[test]
fn test_ensure_diamond_facets_emits_lifecycle() {
    let capture = init_test_capture();

    let current = vec![facet(ADDR_CF7E, &["0x11111111"])];
    let model = vec![
        facet(ADDR_CF7E, &["0x11111111"]),
        facet(ADDR_A513, &["0x22222222"]),
        facet(ADDR_E7F1, &["0x33333333"]),
        facet(ADDR_0165, &["0x44444444"]),
        facet(ADDR_9A9F, &["0x55555555"]),
    ];
    let cut = ensure_diamond_facets(&current, &model).unwrap();
    assert_eq!(cut.len(), 4);

    capture.assert_event_exists("ensure_diamond_facets", EVENT_START);
    let found = capture.count_events(|e| {
        e.op() == Some("ensure_diamond_facets")
            && e.event() == Some(EVENT_END)
            && e.field("cut_len") == Some("4")
    });
    assert!(found >= 1, "end event with cut_len=4 should be captured");
}

#[test]
fn test_diamond_equals_failure_emits_end_error() {
    let capture = init_test_capture();

    let current = vec![facet("notAddress", &["0x11111111"])];
    let model = vec![facet(ADDR_CF7E, &["bad"]), facet(ADDR_CF7E, &["0x11111111"])];
    let err = diamond_equals(&current, &model).unwrap_err();
    // invalid address, invalid selector, duplicate address
    assert_eq!(err.validation_errors().len(), 3);

    let found = capture.count_events(|e| {
        e.op() == Some("diamond_equals")
            && e.event() == Some(EVENT_END_ERROR)
            && e.field("error_count") == Some("3")
    });
    assert!(found >= 1, "end_error event with error_count=3 should be captured");
}
