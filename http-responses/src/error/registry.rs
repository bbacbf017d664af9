use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("Unknown Identifier Error: {identifier} {location}")]
    UnknownIdentifier {
        identifier: String,
        location: ErrorLocation,
    },

    #[error("Unknown Code Error: {code} {location}")]
    UnknownCode { code: u16, location: ErrorLocation },
}
