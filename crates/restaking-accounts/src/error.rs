use sol_primitives::AddressError;
use thiserror::Error;

/// Account decoding and address derivation errors.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("account data too short: expected at least {expected} bytes, got {actual}")]
    DataTooShort { expected: usize, actual: usize },

    #[error("invalid discriminator: expected {expected}, got {actual}")]
    InvalidDiscriminator { expected: u64, actual: u64 },

    #[error(transparent)]
    Address(#[from] AddressError),
}
