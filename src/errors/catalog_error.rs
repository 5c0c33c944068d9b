use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}
