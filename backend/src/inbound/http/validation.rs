//! Shared request validation helpers for the HTTP handlers.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;

use crate::domain::{Error, MessageId, UserId};

/// Machine-readable codes placed in `details.code` of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidId,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidId => "invalid_id",
            Self::MalformedBody => "malformed_body",
        }
    }
}

/// Name of a path segment or body field, as clients see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a positive integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ValidationCode::InvalidId.as_str(),
    }))
}

pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    value
        .trim()
        .parse::<UserId>()
        .map_err(|_| invalid_id_error(field, value))
}

pub(crate) fn parse_message_id(value: &str, field: FieldName) -> Result<MessageId, Error> {
    value
        .trim()
        .parse::<MessageId>()
        .map_err(|_| invalid_id_error(field, value))
}

fn malformed_body(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let error = Error::invalid_request("request body must be valid JSON").with_details(json!({
        "reason": err.to_string(),
        "code": ValidationCode::MalformedBody.as_str(),
    }));
    error.into()
}

/// JSON extractor configuration that reports bad bodies as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(malformed_body)
}
