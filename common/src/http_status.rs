//! HTTP status code with range classification.

use serde::Serialize;

/// Numeric HTTP status code.
///
/// Any `u16` is accepted; nothing here checks that the code is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HttpStatusCode(pub u16);

/// Leading-digit class of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    /// Outside 100..600.
    Unknown,
}

impl HttpStatusCode {
    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    pub const fn class(&self) -> StatusClass {
        match self.0 {
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Unknown,
        }
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Codes that produce an error-kind response: 400 up to, not including, 600.
    ///
    /// Everything else, including codes above 599, is a plain status.
    pub fn is_error(&self) -> bool {
        matches!(self.class(), StatusClass::ClientError | StatusClass::ServerError)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl From<HttpStatusCode> for u16 {
    fn from(code: HttpStatusCode) -> Self {
        code.0
    }
}

impl PartialEq<u16> for HttpStatusCode {
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
