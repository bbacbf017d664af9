//! Response values and the factory that classifies them.
//!
//! A response is either a plain [`StatusValue`] or an [`ErrorValue`]. The split is
//! purely numeric: 400 up to 599 is an error, everything else is a status.

use common::{ErrorLocation, HttpStatusCode};

use serde::Serialize;
use thiserror::Error as ThisError;

/// Non-error response: informational, success, redirection, or anything
/// outside 100..600.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusValue {
    pub http_status: HttpStatusCode,
    pub message: String,
}

/// Error response for codes 400..600.
///
/// Implements [`std::error::Error`], so it can be returned as `Err`, boxed as
/// `dyn Error`, and propagated with `?`. `location` is where it was created.
#[derive(Debug, Clone, ThisError, Serialize)]
#[error("Http Error {http_status}: {message} {location}")]
pub struct ErrorValue {
    pub http_status: HttpStatusCode,
    pub message: String,
    #[serde(skip)]
    pub location: ErrorLocation,
}

/// Which of the two response kinds a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Status,
    Error,
}

/// Result of every named constructor.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Status(StatusValue),
    Error(ErrorValue),
}

/// Build a response for `code`, choosing the kind from the code alone.
///
/// No range validation happens beyond that choice: 42 and 999 are both
/// accepted and come back as [`StatusValue`].
#[track_caller]
pub fn create(code: u16, message: impl Into<String>) -> Response {
    let http_status = HttpStatusCode(code);
    let message = message.into();

    if http_status.is_error() {
        Response::Error(ErrorValue {
            http_status,
            message,
            location: ErrorLocation::caller(),
        })
    } else {
        Response::Status(StatusValue {
            http_status,
            message,
        })
    }
}

impl Response {
    pub fn kind(&self) -> ResponseKind {
        match self {
            Response::Status(_) => ResponseKind::Status,
            Response::Error(_) => ResponseKind::Error,
        }
    }

    pub fn http_status(&self) -> HttpStatusCode {
        match self {
            Response::Status(status) => status.http_status,
            Response::Error(error) => error.http_status,
        }
    }

    /// Client errors (4xx) are the caller's fault, server errors (5xx) are ours.
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    pub fn is_server_error(&self) -> bool {
        self.http_status().is_server_error()
    }

    pub fn message(&self) -> &str {
        match self {
            Response::Status(status) => &status.message,
            Response::Error(error) => &error.message,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind() == ResponseKind::Error
    }

    #[inline]
    pub fn is_status(&self) -> bool {
        self.kind() == ResponseKind::Status
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Response::Error(error) => Some(error),
            Response::Status(_) => None,
        }
    }

    pub fn as_status(&self) -> Option<&StatusValue> {
        match self {
            Response::Status(status) => Some(status),
            Response::Error(_) => None,
        }
    }

    /// Error responses become `Err`, so callers can use `?`.
    pub fn into_result(self) -> Result<StatusValue, ErrorValue> {
        match self {
            Response::Status(status) => Ok(status),
            Response::Error(error) => Err(error),
        }
    }
}

impl From<StatusValue> for Response {
    fn from(status: StatusValue) -> Self {
        Response::Status(status)
    }
}

impl From<ErrorValue> for Response {
    fn from(error: ErrorValue) -> Self {
        Response::Error(error)
    }
}

impl From<Response> for Result<StatusValue, ErrorValue> {
    fn from(response: Response) -> Self {
        response.into_result()
    }
}
