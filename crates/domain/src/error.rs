pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] BoxError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error(transparent)]
    Other(#[from] BoxError),
}

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("cancelled")]
    Cancelled,
    #[error(transparent)]
    Read(#[from] ReadError),
}

impl From<StorageError> for PlanError {
    fn from(value: StorageError) -> Self {
        PlanError::Read(ReadError::Storage(value))
    }
}
