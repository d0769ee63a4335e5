use thiserror::Error;

use crate::core::config::ConfigError;
use crate::store::StoreError;

/// Anything that ends a launcher run.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Storage failures are only fixed by recreating the database file.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Store(StoreError::Storage(_)))
    }
}
