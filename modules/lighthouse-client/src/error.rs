use thiserror::Error;

pub type Result<T> = std::result::Result<T, LighthouseError>;

#[derive(Debug, Error)]
pub enum LighthouseError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Upload succeeded but no content identifier was returned")]
    MissingCid,
}

impl From<reqwest::Error> for LighthouseError {
    fn from(err: reqwest::Error) -> Self {
        LighthouseError::Network(err.to_string())
    }
}
