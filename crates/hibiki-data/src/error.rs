use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource locator: {0}")]
    Locator(#[from] url::ParseError),

    #[error("{resource}: server returned status {status}")]
    Status { resource: String, status: u16 },

    #[error("{resource}: decode failed: {message}")]
    Decode { resource: String, message: String },
}
