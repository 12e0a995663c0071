/// Errors reported by network construction, training and persistence.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Caller-supplied data does not match a layer's declared width.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// A hyperparameter or architecture value violates a precondition.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
