//! Shared primitives for the http-responses workspace.
//!
//! Nothing in here knows about reason phrases or response values. This crate
//! only holds the numeric status code with its range classification and the
//! call-site location every error in the workspace carries.

pub mod error;
pub mod http_status;


pub use error::error_location::ErrorLocation;
pub use http_status::{HttpStatusCode, StatusClass};
