pub mod logger;
pub mod registry;

pub use logger::LoggerError;
pub use registry::RegistryError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponsesError {
    #[error(transparent)]
    Registry(#[from] registry::RegistryError),

    #[error(transparent)]
    Logger(#[from] logger::LoggerError),
}
