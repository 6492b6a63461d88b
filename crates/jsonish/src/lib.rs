//! Reader for the JSONish dialect produced by the mission exporter.
//!
//! JSONish is read as JSON5: unquoted keys, trailing commas and `//` or
//! `/* */` comments are accepted. Values land in a `serde_json::Value` whose
//! objects keep document order, and integers stay `i64`.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum JsonishError {
    #[error("JSONish parse error at line {line}, col {col}: {message}")]
    Syntax {
        line: usize,
        col: usize,
        message: String,
    },
    #[error("JSONish parse error: {0}")]
    Message(String),
}

impl From<json5::Error> for JsonishError {
    fn from(err: json5::Error) -> Self {
        match err {
            json5::Error::Message {
                msg,
                location: Some(location),
            } => JsonishError::Syntax {
                line: location.line,
                col: location.column,
                message: msg,
            },
            json5::Error::Message { msg, location: None } => JsonishError::Message(msg),
        }
    }
}

/// Parse a JSONish document into a JSON value.
pub fn parse(src: &str) -> Result<Value, JsonishError> {
    Ok(json5::from_str(src)?)
}
