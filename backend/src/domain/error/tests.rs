//! Tests for the domain error payload and its wire format.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn missing_field() -> Error {
    Error::invalid_request("missing required field `name` for planet")
        .with_details(json!({ "field": "name", "code": "missing_field" }))
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
#[should_panic(expected = "error messages must satisfy validation")]
fn new_panics_on_blank_message() {
    let _ = Error::new(ErrorCode::NotFound, "");
}

#[rstest]
fn serialises_message_under_msg(missing_field: Error) {
    let value = serde_json::to_value(&missing_field).expect("serialise error");

    assert_eq!(
        value,
        json!({
            "msg": "missing required field `name` for planet",
            "code": "invalid_request",
            "details": { "field": "name", "code": "missing_field" },
        })
    );
}

#[rstest]
fn omits_absent_details() {
    let value = serde_json::to_value(Error::not_found("user 4 not found")).expect("serialise");

    assert_eq!(value, json!({ "msg": "user 4 not found", "code": "not_found" }));
}

#[rstest]
fn deserialises_wire_shape(missing_field: Error) {
    let raw = serde_json::to_string(&missing_field).expect("serialise");
    let parsed: Error = serde_json::from_str(&raw).expect("deserialise");

    assert_eq!(parsed, missing_field);
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::conflict("name taken").to_string(), "name taken");
}
