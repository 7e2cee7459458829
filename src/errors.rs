use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloudPhotoError {
    /// Missing, malformed or unfilled config file
    #[error("{0}")]
    Config(String),

    /// Invalid album name, path or empty required option
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Directory not readable or not writable
    #[error("{0}")]
    Access(String),

    /// Failure reported by the object storage
    #[error("{0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, CloudPhotoError>;
