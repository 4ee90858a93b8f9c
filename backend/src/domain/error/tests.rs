//! Tests for the error payload shape and trace propagation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn upstream_failure() -> Error {
    Error::from(FaultCode::UpstreamCallFailed)
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "upstream": "status 503: maintenance" }))
}

#[rstest]
fn message_follows_the_catalogue() {
    let err = Error::from(FaultCode::EmployeeNotFoundByName);
    assert_eq!(err.code(), "E5");
    assert_eq!(err.message(), "Employee not found with the specified name");
    assert_eq!(err.class(), FaultClass::NotFound);
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    let err = Error::from(FaultCode::NoEmployeesFound);
    assert!(err.trace_id().is_none());
}

#[tokio::test]
async fn trace_id_is_captured_from_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let err = TraceId::scope(trace_id, async { Error::from(FaultCode::RateLimited) }).await;
    assert_eq!(err.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_with_short_code_under_error_key() {
    let err = Error::from(FaultCode::MissingOrInvalidName).with_trace_id(TRACE_ID);
    let value = serde_json::to_value(&err).expect("serialise");
    assert_eq!(
        value,
        json!({
            "error": "E4",
            "message": "Name is required",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
fn round_trips_through_json(upstream_failure: Error) {
    let encoded = serde_json::to_string(&upstream_failure).expect("serialise");
    let decoded: Error = serde_json::from_str(&encoded).expect("deserialise");
    assert_eq!(decoded, upstream_failure);
}

#[rstest]
fn rejects_unknown_codes() {
    let result = serde_json::from_value::<Error>(json!({
        "error": "E99",
        "message": "nope",
    }));
    assert!(result.is_err());
}

#[rstest]
fn redaction_strips_internal_details(upstream_failure: Error) {
    let redacted = upstream_failure.redacted();
    assert!(redacted.details().is_none());
    assert_eq!(redacted.trace_id(), Some(TRACE_ID));
    assert_eq!(redacted.message(), "Failed to make the REST API request");
}

#[rstest]
fn redaction_keeps_bad_input_details() {
    let err = Error::from(FaultCode::InvalidAgeLimit).with_details(json!({ "field": "age" }));
    assert_eq!(err.redacted(), err);
}
