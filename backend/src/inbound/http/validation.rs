//! Request body validation shared by the resource handlers.
//!
//! Bodies are read as raw bytes so that an absent body, a non-JSON body and a
//! JSON body that is not an object all produce the same "you must supply a
//! body" failure, independent of the request's `Content-Type`. Required
//! fields are checked on the parsed object before it is decoded into a typed
//! request, which keeps the missing-field message stable and independent of
//! serde's wording.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::domain::{EntityKind, Error};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingBody,
    MissingField,
    InvalidBody,
    MismatchedUser,
    TooLong,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingBody => "missing_body",
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidBody => "invalid_body",
            ErrorCode::MismatchedUser => "mismatched_user",
            ErrorCode::TooLong => "too_long",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Upper bound, in characters, on a string field. Mirrors the `VARCHAR`
/// widths in the schema migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldLimit {
    field: FieldName,
    max_chars: usize,
}

impl FieldLimit {
    pub(crate) const fn new(field: FieldName, max_chars: usize) -> Self {
        Self { field, max_chars }
    }
}

pub(crate) fn missing_body_error() -> Error {
    Error::invalid_request("you must supply a body")
        .with_details(json!({ "code": ErrorCode::MissingBody.as_str() }))
}

pub(crate) fn missing_field_error(field: FieldName, resource: EntityKind) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field `{field}` for {resource}"))
        .with_details(json!({
            "field": field,
            "code": ErrorCode::MissingField.as_str(),
        }))
}

pub(crate) fn invalid_body_error(resource: EntityKind, cause: &serde_json::Error) -> Error {
    Error::invalid_request(format!("invalid {resource} body: {cause}"))
        .with_details(json!({ "code": ErrorCode::InvalidBody.as_str() }))
}

pub(crate) fn too_long_error(limit: FieldLimit, resource: EntityKind) -> Error {
    let field = limit.field.as_str();
    Error::invalid_request(format!(
        "field `{field}` for {resource} must be at most {} characters",
        limit.max_chars
    ))
    .with_details(json!({
        "field": field,
        "code": ErrorCode::TooLong.as_str(),
    }))
}

pub(crate) fn mismatched_user_error(path_user: i32, body_user: i32) -> Error {
    Error::invalid_request(format!(
        "user_id {body_user} in the body does not match user {path_user} in the path"
    ))
    .with_details(json!({
        "field": "user_id",
        "code": ErrorCode::MismatchedUser.as_str(),
    }))
}

/// Parse `body` as a JSON object.
///
/// Empty, malformed and non-object bodies all fail with
/// [`missing_body_error`].
pub(crate) fn json_object(body: &[u8]) -> Result<Map<String, Value>, Error> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        _ => Err(missing_body_error()),
    }
}

/// Fail on the first of `fields` that is absent or `null`.
pub(crate) fn require_fields(
    object: &Map<String, Value>,
    resource: EntityKind,
    fields: &[FieldName],
) -> Result<(), Error> {
    match fields
        .iter()
        .find(|field| object.get(field.as_str()).is_none_or(Value::is_null))
    {
        Some(field) => Err(missing_field_error(*field, resource)),
        None => Ok(()),
    }
}

/// Fail on the first string field of `object` longer than its limit.
/// Absent, `null` and non-string values are left to the typed decode.
pub(crate) fn enforce_limits(
    object: &Map<String, Value>,
    resource: EntityKind,
    limits: &[FieldLimit],
) -> Result<(), Error> {
    match limits.iter().find(|limit| {
        object
            .get(limit.field.as_str())
            .and_then(Value::as_str)
            .is_some_and(|value| value.chars().count() > limit.max_chars)
    }) {
        Some(limit) => Err(too_long_error(*limit, resource)),
        None => Ok(()),
    }
}

/// Full pipeline for a request body: object check, required fields, length
/// limits, typed decode. Unknown fields are ignored.
pub(crate) fn parse_limited_body<T>(
    body: &[u8],
    resource: EntityKind,
    required: &[FieldName],
    limits: &[FieldLimit],
) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let object = json_object(body)?;
    require_fields(&object, resource, required)?;
    enforce_limits(&object, resource, limits)?;
    serde_json::from_value(Value::Object(object))
        .map_err(|err| invalid_body_error(resource, &err))
}

/// [`parse_limited_body`] for bodies without string columns.
pub(crate) fn parse_body<T>(
    body: &[u8],
    resource: EntityKind,
    required: &[FieldName],
) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    parse_limited_body(body, resource, required, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;
    use serde::Deserialize;

    const NAME: FieldName = FieldName::new("name");
    const DIAMETER: FieldName = FieldName::new("diameter");

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        #[serde(default)]
        diameter: Option<i32>,
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"   ".as_slice())]
    #[case(b"not json".as_slice())]
    #[case(b"null".as_slice())]
    #[case(b"[1, 2]".as_slice())]
    #[case(b"\"name\"".as_slice())]
    fn non_object_bodies_are_missing(#[case] body: &[u8]) {
        let error = json_object(body).expect_err("body should be rejected");
        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(error.message(), "you must supply a body");
    }

    #[rstest]
    #[case(br#"{}"#.as_slice())]
    #[case(br#"{"name": null}"#.as_slice())]
    #[case(br#"{"diameter": 10}"#.as_slice())]
    fn absent_or_null_required_fields_are_named(#[case] body: &[u8]) {
        let error = parse_body::<Sample>(body, EntityKind::Planet, &[NAME])
            .expect_err("field should be required");

        assert_eq!(error.message(), "missing required field `name` for planet");
        assert_eq!(
            error.details(),
            Some(&json!({ "field": "name", "code": "missing_field" }))
        );
    }

    #[rstest]
    fn first_missing_field_wins() {
        let error = parse_body::<Sample>(br#"{}"#, EntityKind::Planet, &[DIAMETER, NAME])
            .expect_err("fields should be required");
        assert_eq!(
            error.message(),
            "missing required field `diameter` for planet"
        );
    }

    #[rstest]
    fn wrong_types_are_invalid_requests() {
        let error = parse_body::<Sample>(br#"{"name": 5}"#, EntityKind::Planet, &[NAME])
            .expect_err("type mismatch");

        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        assert!(error.message().starts_with("invalid planet body:"));
    }

    #[rstest]
    fn valid_bodies_decode_and_ignore_unknown_fields() {
        let sample: Sample = parse_body(
            br#"{"name": "Hoth", "climate": "frozen"}"#,
            EntityKind::Planet,
            &[NAME],
        )
        .expect("valid body");

        assert_eq!(
            sample,
            Sample {
                name: "Hoth".to_owned(),
                diameter: None,
            }
        );
    }

    #[rstest]
    #[case(50, true)]
    #[case(51, false)]
    fn string_fields_are_bounded(#[case] length: usize, #[case] accepted: bool) {
        let body = json!({ "name": "é".repeat(length) }).to_string();

        let result = parse_limited_body::<Sample>(
            body.as_bytes(),
            EntityKind::Planet,
            &[NAME],
            &[FieldLimit::new(NAME, 50)],
        );

        match result {
            Ok(sample) => {
                assert!(accepted);
                assert_eq!(sample.name.chars().count(), length);
            }
            Err(error) => {
                assert!(!accepted);
                assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
                assert_eq!(
                    error.message(),
                    "field `name` for planet must be at most 50 characters"
                );
                assert_eq!(
                    error.details(),
                    Some(&json!({ "field": "name", "code": "too_long" }))
                );
            }
        }
    }

    #[rstest]
    fn null_values_skip_the_length_check() {
        let object = json_object(br#"{"name": null}"#).expect("object");
        assert!(enforce_limits(&object, EntityKind::Planet, &[FieldLimit::new(NAME, 1)]).is_ok());
    }

    #[rstest]
    fn mismatched_user_names_both_sides() {
        let error = mismatched_user_error(1, 2);
        assert_eq!(
            error.message(),
            "user_id 2 in the body does not match user 1 in the path"
        );
    }
}
