use thiserror::Error;

/// Failures surfaced by a [`crate::Bot`] or a [`crate::Handler`]. Only delivery can fail: lookups
/// degrade to a reply text instead of an error.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
