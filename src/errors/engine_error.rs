use crate::errors::catalog_error::CatalogError;
use crate::errors::storage_error::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    Execution(String),
}

impl From<String> for EngineError {
    fn from(message: String) -> Self {
        EngineError::Execution(message)
    }
}
