//! The standard status table.
//!
//! Every entry becomes a `Status` variant whose name is the identifier derived
//! from its reason phrase, so `Status::InternalServerError.respond()` is the
//! typed form of looking up `"InternalServerError"` in the registry.

use crate::response::{Response, create};

use common::{HttpStatusCode, StatusClass};

use std::fmt::{Display, Formatter, Result as FormatResult};

macro_rules! status_table {
    ($( $variant:ident = $code:literal, $phrase:literal; )+) => {
        /// A registered HTTP status.
        ///
        /// The discriminant is the numeric code, so `Status::NotFound as u16 == 404`.
        #[allow(clippy::upper_case_acronyms)]
        #[repr(u16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Status {
            $(
                #[doc = concat!($code, " ", $phrase)]
                $variant = $code,
            )+
        }

        /// `(code, reason phrase)` pairs in ascending code order.
        pub const STATUS_TABLE: &[(u16, &str)] = &[$(($code, $phrase),)+];

        impl Status {
            /// Every status, in ascending code order.
            pub const ALL: &'static [Status] = &[$(Status::$variant,)+];

            pub const fn reason_phrase(self) -> &'static str {
                match self {
                    $(Status::$variant => $phrase,)+
                }
            }

            /// Variant name. Always equal to `to_identifier(self.reason_phrase())`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Status::$variant => stringify!($variant),)+
                }
            }

            pub const fn from_code(code: u16) -> Option<Status> {
                match code {
                    $($code => Some(Status::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

status_table! {
    Continue = 100, "Continue";
    SwitchingProtocols = 101, "Switching Protocols";
    Processing = 102, "Processing";
    EarlyHints = 103, "Early Hints";
    OK = 200, "OK";
    Created = 201, "Created";
    Accepted = 202, "Accepted";
    NonAuthoritativeInformation = 203, "Non-Authoritative Information";
    NoContent = 204, "No Content";
    ResetContent = 205, "Reset Content";
    PartialContent = 206, "Partial Content";
    MultiStatus = 207, "Multi-Status";
    AlreadyReported = 208, "Already Reported";
    IMUsed = 226, "IM Used";
    MultipleChoices = 300, "Multiple Choices";
    MovedPermanently = 301, "Moved Permanently";
    Found = 302, "Found";
    SeeOther = 303, "See Other";
    NotModified = 304, "Not Modified";
    UseProxy = 305, "Use Proxy";
    TemporaryRedirect = 307, "Temporary Redirect";
    PermanentRedirect = 308, "Permanent Redirect";
    BadRequest = 400, "Bad Request";
    Unauthorized = 401, "Unauthorized";
    PaymentRequired = 402, "Payment Required";
    Forbidden = 403, "Forbidden";
    NotFound = 404, "Not Found";
    MethodNotAllowed = 405, "Method Not Allowed";
    NotAcceptable = 406, "Not Acceptable";
    ProxyAuthenticationRequired = 407, "Proxy Authentication Required";
    RequestTimeout = 408, "Request Timeout";
    Conflict = 409, "Conflict";
    Gone = 410, "Gone";
    LengthRequired = 411, "Length Required";
    PreconditionFailed = 412, "Precondition Failed";
    PayloadTooLarge = 413, "Payload Too Large";
    URITooLong = 414, "URI Too Long";
    UnsupportedMediaType = 415, "Unsupported Media Type";
    RangeNotSatisfiable = 416, "Range Not Satisfiable";
    ExpectationFailed = 417, "Expectation Failed";
    ImATeapot = 418, "I'm a Teapot";
    MisdirectedRequest = 421, "Misdirected Request";
    UnprocessableEntity = 422, "Unprocessable Entity";
    Locked = 423, "Locked";
    FailedDependency = 424, "Failed Dependency";
    TooEarly = 425, "Too Early";
    UpgradeRequired = 426, "Upgrade Required";
    PreconditionRequired = 428, "Precondition Required";
    TooManyRequests = 429, "Too Many Requests";
    RequestHeaderFieldsTooLarge = 431, "Request Header Fields Too Large";
    UnavailableForLegalReasons = 451, "Unavailable For Legal Reasons";
    InternalServerError = 500, "Internal Server Error";
    NotImplemented = 501, "Not Implemented";
    BadGateway = 502, "Bad Gateway";
    ServiceUnavailable = 503, "Service Unavailable";
    GatewayTimeout = 504, "Gateway Timeout";
    HTTPVersionNotSupported = 505, "HTTP Version Not Supported";
    VariantAlsoNegotiates = 506, "Variant Also Negotiates";
    InsufficientStorage = 507, "Insufficient Storage";
    LoopDetected = 508, "Loop Detected";
    BandwidthLimitExceeded = 509, "Bandwidth Limit Exceeded";
    NotExtended = 510, "Not Extended";
    NetworkAuthenticationRequired = 511, "Network Authentication Required";
}

impl Status {
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    #[inline]
    pub const fn http_status(self) -> HttpStatusCode {
        HttpStatusCode(self.code())
    }

    #[inline]
    pub const fn class(self) -> StatusClass {
        self.http_status().class()
    }

    /// Build a response carrying the standard reason phrase.
    #[track_caller]
    pub fn respond(self) -> Response {
        create(self.code(), self.reason_phrase())
    }

    /// Build a response carrying `message` instead of the reason phrase.
    #[track_caller]
    pub fn with_message(self, message: impl Into<String>) -> Response {
        create(self.code(), message)
    }

    /// `None` falls back to the reason phrase.
    #[track_caller]
    pub fn call(self, custom_message: Option<&str>) -> Response {
        create(self.code(), custom_message.unwrap_or(self.reason_phrase()))
    }
}

impl Display for Status {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{} {}", self.code(), self.reason_phrase())
    }
}

impl TryFrom<u16> for Status {
    type Error = HttpStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Status::from_code(code).ok_or(HttpStatusCode(code))
    }
}
