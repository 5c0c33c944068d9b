use crate::errors::record_error::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("no such table: {0}")]
    UnknownTable(String),

    #[error("page {0} lies past the end of the heap file")]
    PageOutOfBounds(i32),

    #[error("page {page_id} is corrupt: {reason}")]
    CorruptPage { page_id: i32, reason: String },

    #[error("serialized page is {got} bytes but the page size is {expected}")]
    PageSizeMismatch { got: usize, expected: usize },

    #[error("record does not fit in a freshly split page")]
    SplitOverflow,

    #[error("table rebuild failed while copying records")]
    AlterRebuild,
}
