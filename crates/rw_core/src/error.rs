use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("upstream news API unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("upstream news API returned a malformed response: {0}")]
    UpstreamMalformed(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::UpstreamMalformed(err.to_string())
        } else {
            Error::UpstreamUnavailable(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
