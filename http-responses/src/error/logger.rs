use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LoggerError {
    #[error("Logger Initialization Error: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}
