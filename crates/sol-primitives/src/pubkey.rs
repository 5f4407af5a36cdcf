//! The 32-byte Solana public key value type.
//!
//! Solana addresses are simply Base58-encoded 32-byte values. There is no
//! hashing step (unlike Bitcoin or Ethereum): the raw bytes ARE the address
//! bytes, so [`Pubkey`] is a plain fixed-size array with equality and a
//! Base58 text form, nothing more.

use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;

/// An opaque 32-byte identifier: account address, program id, NCN, vault.
///
/// Carries no ledger semantics beyond identity and raw-byte access.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    /// Byte width of every Solana public key.
    pub const LEN: usize = 32;

    /// Wrap raw bytes as a key. No validation is possible or performed.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Copy a key out of a byte slice.
    ///
    /// Fails if the slice is not exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| {
            AddressError::InvalidAddress(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }

    /// Borrow the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy the raw bytes out.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(&self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Pubkey {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| AddressError::InvalidAddress(format!("base58 decode failed: {e}")))?;
        Self::from_bytes(&bytes)
    }
}
