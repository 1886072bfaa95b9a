//! Shared validation helpers for inbound HTTP adapters.
//!
//! Body and path problems are reported as `400 invalid_request` before any
//! domain port runs, but never ahead of a `401`: handlers take their JSON
//! body as [`DeferredJson`] so the bearer check settles first.

use actix_web::web;
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidNumber,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_number_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a number")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidNumber.as_str(),
    }))
}

/// Parse a path segment holding a numeric identifier.
pub(crate) fn parse_id(value: &str, field: FieldName) -> Result<i32, Error> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid_number_error(field, value))
}

fn malformed_body_error(reason: &str) -> Error {
    Error::invalid_request("request body is invalid").with_details(json!({
        "reason": reason,
        "code": ErrorCode::MalformedBody.as_str(),
    }))
}

/// JSON extractor configuration reporting body errors as domain errors.
///
/// Covers malformed JSON, wrong content types and fields whose JSON type
/// does not match the request schema.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| malformed_body_error(&err.to_string()).into())
}

/// A JSON body whose extraction failure is held back until the handler runs.
///
/// Actix resolves handler extractors concurrently and answers with whichever
/// fails first. Wrapping the body keeps a bad payload from pre-empting the
/// authentication extractor.
pub(crate) type DeferredJson<T> = Result<web::Json<T>, actix_web::Error>;

/// Unwrap a [`DeferredJson`] into its payload or the `400` it failed with.
pub(crate) fn json_body<T>(body: DeferredJson<T>) -> Result<T, Error> {
    body.map(web::Json::into_inner).map_err(|err| {
        err.as_error::<Error>()
            .cloned()
            .unwrap_or_else(|| malformed_body_error(&err.to_string()))
    })
}
