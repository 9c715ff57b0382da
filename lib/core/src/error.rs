use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// User-correctable input problem (missing or non-positive measurement,
    /// malformed filter label). Surfaced to the caller.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Internal scoring failure. Engines convert this to a deterministic
    /// fallback at their boundary; it never reaches the caller.
    #[error("Scoring failed: {0}")]
    Scoring(String),
}
