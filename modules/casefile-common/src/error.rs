use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaseFileError>;

#[derive(Error, Debug)]
pub enum CaseFileError {
    #[error("Invalid entropy input: {0}")]
    InvalidEntropy(String),

    #[error("Malformed narrative: {0}")]
    MalformedNarrative(String),

    #[error("Publication failed: {0}")]
    PublicationFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
