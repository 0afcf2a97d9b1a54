pub use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the Leafly API. Any of these is reported to strain searchers as an outage.
#[derive(Error, Debug)]
pub enum LeaflyError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Leafly returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed Leafly response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LeaflyError>;
