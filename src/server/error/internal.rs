use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to produce a digest.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Session token could not be signed.
    #[error("Failed to sign session token: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),
}
