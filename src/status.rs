//! HTTP status classification
//!
//! Maps a response status to success or a [`StatusKind`], then tries to
//! enrich the failure with whatever text the server sent in the body.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// A non-success HTTP status the API is known to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// 304
    Unmodified,
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 422
    UnprocessableEntity,
    /// 429
    TooManyRequests,
    /// 500
    InternalServerError,
    /// Any other status outside the success set
    UnexpectedResponse { status: u16 },
}

impl StatusKind {
    /// Vendor description of the status
    pub fn description(self) -> &'static str {
        match self {
            StatusKind::Unmodified => "There is no new data. Content is unmodified.",
            StatusKind::BadRequest => "Bad Request (400)",
            StatusKind::Unauthorized => "Unauthorized (401)",
            StatusKind::Forbidden => "Forbidden (403)",
            StatusKind::NotFound => "Not Found (404)",
            StatusKind::Conflict => "Conflict (409)",
            StatusKind::UnprocessableEntity => "Unprocessable Entity (422)",
            StatusKind::TooManyRequests => "Too Many Requests (429)",
            StatusKind::InternalServerError => "Internal Server Error (500)",
            StatusKind::UnexpectedResponse { .. } => "Unknown error with response",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::UnexpectedResponse { status } => {
                write!(f, "{} ({status})", self.description())
            }
            _ => f.write_str(self.description()),
        }
    }
}

/// Classify a status code
pub fn classify(status: u16) -> std::result::Result<(), StatusKind> {
    match status {
        200 | 201 | 204 => Ok(()),
        304 => Err(StatusKind::Unmodified),
        400 => Err(StatusKind::BadRequest),
        401 => Err(StatusKind::Unauthorized),
        403 => Err(StatusKind::Forbidden),
        404 => Err(StatusKind::NotFound),
        409 => Err(StatusKind::Conflict),
        422 => Err(StatusKind::UnprocessableEntity),
        429 => Err(StatusKind::TooManyRequests),
        500 => Err(StatusKind::InternalServerError),
        other => Err(StatusKind::UnexpectedResponse { status: other }),
    }
}

/// Classify a response and enrich failures from the body
///
/// A JSON body carrying `ExceptionMessage` (preferred) or `Message` becomes
/// a described error with exactly that text. Any other text body is
/// appended to the status description. A body that is not valid UTF-8
/// leaves the bare status error.
pub fn check_response(status: u16, body: &[u8]) -> Result<()> {
    match classify(status) {
        Ok(()) => Ok(()),
        Err(kind) => Err(enrich(kind, body)),
    }
}

/// Like [`check_response`], but 404 and 304 mean "nothing here"
///
/// Returns `Ok(false)` for those two codes regardless of the body.
pub fn check_optional_response(status: u16, body: &[u8]) -> Result<bool> {
    match classify(status) {
        Ok(()) => Ok(true),
        Err(StatusKind::NotFound | StatusKind::Unmodified) => Ok(false),
        Err(kind) => Err(enrich(kind, body)),
    }
}

fn enrich(kind: StatusKind, body: &[u8]) -> Error {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
        let message = ["ExceptionMessage", "Message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str));
        if let Some(message) = message {
            return Error::described(message);
        }
    }

    match std::str::from_utf8(body) {
        Ok(text) => {
            warn!("{kind}: server sent no message field, using raw body");
            Error::described(format!("{kind}\n\n{text}"))
        }
        Err(_) => Error::Status { kind },
    }
}
