//! Named constructors for every standard HTTP status.
//!
//! Each status in the standard table gets a constructor named after its reason
//! phrase (`"Internal Server Error"` → `InternalServerError`). Calling it yields a
//! [`Response`]: an [`ErrorValue`] for 4xx/5xx codes, a [`StatusValue`] for
//! everything else.
//!
//! ```
//! use http_responses::{Response, Status, registry};
//!
//! let error = Status::InternalServerError.respond();
//! assert!(error.is_error());
//! assert_eq!(error.message(), "Internal Server Error");
//!
//! let ok = registry().respond("OK", Some("Custom Message")).unwrap();
//! assert!(matches!(ok, Response::Status(_)));
//! assert_eq!(ok.http_status().as_u16(), 200);
//! ```
//!
//! ## Layout
//!
//! - [`identifier`]: reason phrase → identifier
//! - [`response`]: the two value kinds and the classifying factory
//! - [`status`]: the standard table as a `Status` enum
//! - [`registry`](mod@registry): identifier-keyed lookup, built once

pub mod error;
pub mod identifier;
#[cfg(feature = "logging")]
pub mod logger;
pub mod registry;
pub mod response;
pub mod status;

#[cfg(test)]
mod tests;

pub use common::{ErrorLocation, HttpStatusCode};
pub use error::{LoggerError, RegistryError, ResponsesError};
pub use identifier::to_identifier;
pub use registry::{Registry, StatusConstructor, registry};
pub use response::{ErrorValue, Response, ResponseKind, StatusValue, create};
pub use status::{STATUS_TABLE, Status};
